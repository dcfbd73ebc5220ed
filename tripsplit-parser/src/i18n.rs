#[cfg(all(feature = "ko", feature = "en"))]
compile_error!("Cannot enable both 'ko' and 'en' features at the same time");

#[cfg(feature = "ko")]
pub fn syntax_error_detail(error: impl std::fmt::Display) -> String {
    format!("구문 오류 - {error}")
}

#[cfg(feature = "ko")]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("구문 오류 - 해석되지 않은 입력: {input}")
}

#[cfg(not(feature = "ko"))]
pub fn syntax_error_detail(error: impl std::fmt::Display) -> String {
    format!("Syntax error - {error}")
}

#[cfg(not(feature = "ko"))]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("Syntax error - Unparsed input: {input}")
}
