use ptfmt::{num_to_words_pt, try_num_to_words_pt, Lang, NumberError, Value, WordsError};

fn euros(n: impl Into<Value<'static>>) -> String {
    num_to_words_pt(n, Some("euro"), Lang::PtPt)
}

fn plain(n: impl Into<Value<'static>>) -> String {
    num_to_words_pt(n, None, Lang::PtPt)
}

#[test]
fn test_currency_pluralization() {
    assert_eq!(euros(1), "um euro");
    assert_eq!(euros(2), "dois euros");
    assert_eq!(euros(0), "zero euros");
    assert_eq!(euros(100), "cem euros");
}

#[test]
fn test_cents_clause() {
    assert_eq!(euros(1.50), "um euro e cinquenta centavos");
    assert_eq!(euros(2.01), "dois euros e um centavo");
    assert_eq!(euros(0.99), "zero euros e noventa e nove centavos");
    assert_eq!(euros(10.005), "dez euros e um centavo");
}

#[test]
fn test_cents_without_currency() {
    assert_eq!(plain(12.34), "doze, trinta e quatro");
    assert_eq!(plain(7.0), "sete");
}

#[test]
fn test_mil_comma() {
    assert_eq!(plain(1234), "mil, duzentos e trinta e quatro");
    assert_eq!(plain(1000), "mil");
    assert_eq!(plain(2000), "dois mil");
    assert_eq!(plain(1001), "mil, e um");
    assert_eq!(plain(25_500), "vinte e cinco mil, e quinhentos");
    assert_eq!(plain(25_612), "vinte e cinco mil, seiscentos e doze");
    assert_eq!(
        euros(1234.56),
        "mil, duzentos e trinta e quatro euros e cinquenta e seis centavos"
    );
}

#[test]
fn test_mil_comma_in_the_middle() {
    assert_eq!(
        plain(1_234_567),
        "um milhão duzentos e trinta e quatro mil, quinhentos e sessenta e sete"
    );
    // Exact multiples of 1000 keep the plain form
    assert_eq!(
        plain(1_234_000),
        "um milhão duzentos e trinta e quatro mil"
    );
}

#[test]
fn test_negative_numbers() {
    assert_eq!(plain(-5), "menos cinco");
    assert_eq!(plain(-1234), "menos mil duzentos e trinta e quatro");
    assert_eq!(euros(-1), "menos um euros");
}

#[test]
fn test_empty_currency_is_no_currency() {
    assert_eq!(num_to_words_pt(3.25, Some(""), Lang::PtPt), "três, vinte e cinco");
}

#[test]
fn test_brazilian_vocabulary() {
    assert_eq!(
        num_to_words_pt(16, Some("real"), Lang::PtBr),
        "dezesseis reals"
    );
    assert_eq!(
        num_to_words_pt(1_000_000_000, None, Lang::PtBr),
        "um bilhão"
    );
    assert_eq!(
        num_to_words_pt(1_000_000_000, None, Lang::PtPt),
        "mil milhões"
    );
}

#[test]
fn test_fallback_to_string() {
    assert_eq!(plain("abc"), "abc");
    assert_eq!(plain(f64::INFINITY), "inf");
    assert_eq!(plain(Value::Empty), "None");
    assert_eq!(euros(1e20), "100000000000000000000");
}

#[test]
fn test_try_reports_errors() {
    assert_eq!(
        try_num_to_words_pt(f64::NEG_INFINITY, None, Lang::PtPt),
        Err(WordsError::Number(NumberError::Infinite))
    );
    assert!(matches!(
        try_num_to_words_pt("12", None, Lang::PtPt),
        Err(WordsError::Number(NumberError::TypeMismatch { .. }))
    ));
    assert_eq!(
        try_num_to_words_pt(21, Some("euro"), Lang::PtPt).unwrap(),
        "vinte e um euros"
    );
}
