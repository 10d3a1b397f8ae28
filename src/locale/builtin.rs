//! Built-in locale data.

/// Locale settings for formatting.
#[derive(Debug, Clone)]
pub struct Locale {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub currency_symbol: &'static str,
    pub month_names_full: [&'static str; 12],
    /// Word placed between month and year ("março de 2026")
    pub date_connector: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::pt_pt()
    }
}

impl Locale {
    /// European Portuguese locale.
    pub fn pt_pt() -> Self {
        Locale {
            decimal_separator: ',',
            thousands_separator: '.',
            currency_symbol: "€",
            month_names_full: [
                "janeiro",
                "fevereiro",
                "março",
                "abril",
                "maio",
                "junho",
                "julho",
                "agosto",
                "setembro",
                "outubro",
                "novembro",
                "dezembro",
            ],
            date_connector: "de",
        }
    }

    /// Returns the full month name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        match month {
            1..=12 => Some(self.month_names_full[(month - 1) as usize]),
            _ => None,
        }
    }
}

/// Word tables for spelling out cardinal numbers.
#[derive(Debug)]
pub struct Vocabulary {
    pub zero: &'static str,
    pub negative: &'static str,
    pub conjunction: &'static str,
    /// 1-9, index 0 unused
    pub units: [&'static str; 10],
    /// 10-19
    pub teens: [&'static str; 10],
    /// 20-90 by tens, indices 0 and 1 unused
    pub tens: [&'static str; 10],
    /// Exactly one hundred
    pub hundred: &'static str,
    /// 100-900 prefixes for compound hundreds ("cento e um"), index 0 unused
    pub hundreds: [&'static str; 10],
    pub thousand: &'static str,
    /// Singular/plural nouns for 10^6, 10^(6+step), ...
    pub scales: &'static [(&'static str, &'static str)],
    /// Power-of-ten distance between consecutive scale nouns (6 long, 3 short)
    pub scale_step: u32,
}

const UNITS: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const TENS: [&str; 10] = [
    "", "dez", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

pub(crate) static PT_PT_WORDS: Vocabulary = Vocabulary {
    zero: "zero",
    negative: "menos",
    conjunction: "e",
    units: UNITS,
    teens: [
        "dez",
        "onze",
        "doze",
        "treze",
        "catorze",
        "quinze",
        "dezasseis",
        "dezassete",
        "dezoito",
        "dezanove",
    ],
    tens: TENS,
    hundred: "cem",
    hundreds: HUNDREDS,
    thousand: "mil",
    scales: &[
        ("milhão", "milhões"),
        ("bilião", "biliões"),
        ("trilião", "triliões"),
    ],
    scale_step: 6,
};

pub(crate) static PT_BR_WORDS: Vocabulary = Vocabulary {
    zero: "zero",
    negative: "menos",
    conjunction: "e",
    units: UNITS,
    teens: [
        "dez",
        "onze",
        "doze",
        "treze",
        "quatorze",
        "quinze",
        "dezesseis",
        "dezessete",
        "dezoito",
        "dezenove",
    ],
    tens: TENS,
    hundred: "cem",
    hundreds: HUNDREDS,
    thousand: "mil",
    scales: &[
        ("milhão", "milhões"),
        ("bilhão", "bilhões"),
        ("trilhão", "trilhões"),
        ("quatrilhão", "quatrilhões"),
        ("quintilhão", "quintilhões"),
    ],
    scale_step: 3,
};

impl Vocabulary {
    /// Returns true if `word` is one of this vocabulary's scale nouns.
    pub fn is_scale_noun(&self, word: &str) -> bool {
        self.scales.iter().any(|(one, many)| word == *one || word == *many)
    }
}
