//! Basic tests for utter-api

use utter_api::*;

fn provider() -> TkkTokenProvider {
    TkkTokenProvider::new(TokenKey::parse("406986.2817744745").unwrap())
}

#[test]
fn test_token_vectors() {
    let key = TokenKey::parse("406986.2817744745").unwrap();
    assert_eq!(calculate_token("test", &key), "278125.134055");

    let key = TokenKey::parse("432709.1557755164").unwrap();
    assert_eq!(calculate_token("test2", &key), "914741.749424");
}

#[test]
fn test_single_request_url() {
    let speech = Speech::new("Hello", Config::default()).unwrap();
    let requests = speech.requests(&provider()).unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].to_url(TTS_URL),
        "https://translate.google.com/translate_tts?client=tw-ob&idx=0&ie=UTF-8\
         &q=Hello&textlen=5&tk=653601.1035499&tl=en&total=1&ttsspeed=1"
    );
}

#[test]
fn test_long_text_split_into_numbered_requests() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(5);
    let config = Config::builder().lang("en-us").build().unwrap();
    let speech = Speech::new(text, config).unwrap();
    let requests = speech.requests(&provider()).unwrap();

    assert!(requests.len() > 1);
    for (i, request) in requests.iter().enumerate() {
        assert_eq!(request.idx, i);
        assert_eq!(request.total, requests.len());
        assert_eq!(request.lang, "en-us");
        assert!(request.text.chars().count() <= 100);
        assert_eq!(request.token, calculate_token(&request.text, &provider().key()));
    }
}

#[test]
fn test_language_check_with_scraped_list() {
    let page = "<script src='/js/translate_m.js'></script>\
                {code:'de',name:'German'},{code:'ja',name:'Japanese'}";
    let script = "z={de:1,ja:1}";
    let source = ScrapedLanguages::new(page, script);

    let speech = Speech::new("Guten Tag", Config::builder().lang("DE").build().unwrap()).unwrap();
    assert!(speech.check_language(&source).is_ok());

    let speech = Speech::new("Bonjour", Config::builder().lang("fr").build().unwrap()).unwrap();
    assert!(matches!(
        speech.check_language(&source),
        Err(ApiError::UnsupportedLanguage { code }) if code == "fr"
    ));

    let speech = Speech::new("Bonjour", Config::builder().lang("fr-ca").build().unwrap()).unwrap();
    assert!(speech.check_language(&source).is_ok());
}

#[test]
fn test_custom_symbols_and_legacy() {
    let config = Config::builder()
        .max_chars(10)
        .legacy_punctuation(true)
        .build()
        .unwrap();
    let speech = Speech::new("At 10:01, go.", config).unwrap();
    assert_eq!(speech.tokens().unwrap(), vec!["At 10", "01", "go"]);
}

#[test]
fn test_core_errors_surface() {
    let speech = Speech::new("... !!! ...", Config::default()).unwrap();
    assert!(matches!(speech.tokens(), Err(ApiError::NoSpeakableText)));
}

#[test]
fn test_status_mapping() {
    assert!(matches!(check_status(403, true, "en"), Err(ApiError::BadToken)));
    assert!(matches!(
        check_status(500, false, "en"),
        Err(ApiError::Upstream { status: 500 })
    ));
    assert!(check_status(200, false, "en").is_ok());
}
