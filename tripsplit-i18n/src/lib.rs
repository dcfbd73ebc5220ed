#[cfg(all(feature = "ko", feature = "en"))]
compile_error!("Cannot enable both 'ko' and 'en' features at the same time");

#[cfg(feature = "ko")]
pub mod strings {
    pub const NAME: &str = "이름";
    pub const FOOD: &str = "식비";
    pub const TRANSPORT: &str = "교통비";
    pub const STAY: &str = "숙소비";
    pub const FUEL: &str = "기름값";
    pub const ETC: &str = "기타";
    pub const FUEL_SHARE: &str = "기름값 분담";
    pub const TOTAL: &str = "합계";
    pub const DRIVER: &str = "운전자";
    pub const NO_DRIVER: &str = "없음";
    pub const TOTAL_FUEL: &str = "총 기름값";
    pub const AVERAGE_COST: &str = "1인당 비용";
    pub const START_DATE: &str = "출발일";
    pub const END_DATE: &str = "도착일";
    pub const DESTINATION: &str = "목적지";
    pub const ACCOMMODATION: &str = "숙소";
    pub const TRANSPORT_METHOD: &str = "이동수단";
    pub const PUBLIC_TRANSIT: &str = "대중교통";
    pub const SELF_DRIVEN: &str = "자차";
    pub const RESULT_HEADING: &str = "계산 결과";
    pub const EXPENSES_HEADING: &str = "각 사람별 지출";
    pub const SETTLEMENT_HEADING: &str = "정산 내역 (누가 누구에게 얼마를)";
    pub const CURRENCY_SUFFIX: &str = " 원";
    pub const NOTHING_OWED: &str = "-";
    pub const UNNAMED: &str = "(이름 없음)";
}

#[cfg(not(feature = "ko"))]
pub mod strings {
    pub const NAME: &str = "Name";
    pub const FOOD: &str = "Food";
    pub const TRANSPORT: &str = "Transport";
    pub const STAY: &str = "Lodging";
    pub const FUEL: &str = "Fuel";
    pub const ETC: &str = "Misc";
    pub const FUEL_SHARE: &str = "Fuel share";
    pub const TOTAL: &str = "Total";
    pub const DRIVER: &str = "Driver";
    pub const NO_DRIVER: &str = "none";
    pub const TOTAL_FUEL: &str = "Total fuel";
    pub const AVERAGE_COST: &str = "Cost per person";
    pub const START_DATE: &str = "Start";
    pub const END_DATE: &str = "End";
    pub const DESTINATION: &str = "Destination";
    pub const ACCOMMODATION: &str = "Accommodation";
    pub const TRANSPORT_METHOD: &str = "Transport method";
    pub const PUBLIC_TRANSIT: &str = "Public transit";
    pub const SELF_DRIVEN: &str = "Self-driven";
    pub const RESULT_HEADING: &str = "Result";
    pub const EXPENSES_HEADING: &str = "Spending per person";
    pub const SETTLEMENT_HEADING: &str = "Settlement (row owes column)";
    pub const CURRENCY_SUFFIX: &str = "";
    pub const NOTHING_OWED: &str = "-";
    pub const UNNAMED: &str = "(unnamed)";
}

pub use strings::*;

#[cfg(feature = "ko")]
pub fn rejected_command(line: usize, error: impl std::fmt::Display) -> String {
    format!("{line}행: 무시된 명령 - {error}")
}

#[cfg(not(feature = "ko"))]
pub fn rejected_command(line: usize, error: impl std::fmt::Display) -> String {
    format!("Line {line}: command ignored - {error}")
}

#[cfg(feature = "ko")]
pub fn calculation_heading(line: Option<usize>) -> String {
    match line {
        Some(line) => format!("{RESULT_HEADING} ({line}행)"),
        None => RESULT_HEADING.to_string(),
    }
}

#[cfg(not(feature = "ko"))]
pub fn calculation_heading(line: Option<usize>) -> String {
    match line {
        Some(line) => format!("{RESULT_HEADING} (line {line})"),
        None => RESULT_HEADING.to_string(),
    }
}
