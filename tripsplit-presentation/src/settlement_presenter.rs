use crate::{
    format::{format_amount, format_currency, group_thousands, transport_label},
    svg_table::{render_svg, stack_svgs},
    table::{Alignment, Table, render_text},
};
use std::borrow::Cow;
use tripsplit_domain::{ParticipantRow, SettlementResult, TripConfig};
use tripsplit_i18n as i18n;

const EXPENSE_ALIGNMENTS: [Alignment; 8] = [
    Alignment::Left,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
];
const TOTAL_COLUMN: usize = 7;

/// Display-ready form of a settlement: every amount already formatted.
pub struct SettlementView {
    pub heading: String,
    pub summary: Vec<(&'static str, String)>,
    pub expense_table: Table<'static>,
    pub settlement_table: Table<'static>,
}

impl SettlementView {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.heading);
        out.push('\n');
        for (label, value) in &self.summary {
            out.push_str(&format!("{label}: {value}\n"));
        }
        out.push('\n');
        out.push_str(&render_text(&self.expense_table));
        out.push_str("\n\n");
        out.push_str(&render_text(&self.settlement_table));
        out.push('\n');
        out
    }

    pub fn expense_table_svg(&self) -> String {
        render_svg(&self.expense_table)
    }

    pub fn settlement_table_svg(&self) -> String {
        render_svg(&self.settlement_table)
    }

    /// Both tables stacked into one SVG document.
    pub fn to_svg(&self) -> Option<String> {
        let expenses = self.expense_table_svg();
        let settlement = self.settlement_table_svg();
        stack_svgs(&[&expenses, &settlement])
    }
}

pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn render(trip: &TripConfig, result: &SettlementResult) -> SettlementView {
        Self::render_with_heading(i18n::RESULT_HEADING.to_string(), trip, result)
    }

    pub fn render_with_heading(
        heading: String,
        trip: &TripConfig,
        result: &SettlementResult,
    ) -> SettlementView {
        let names: Vec<String> = result.rows.iter().map(display_name).collect();

        SettlementView {
            heading,
            summary: Self::build_summary(trip, result),
            expense_table: Self::build_expense_table(result, &names),
            settlement_table: Self::build_settlement_table(result, &names),
        }
    }

    pub fn build_summary(
        trip: &TripConfig,
        result: &SettlementResult,
    ) -> Vec<(&'static str, String)> {
        let driver = result
            .driver_name
            .clone()
            .unwrap_or_else(|| i18n::NO_DRIVER.to_string());

        vec![
            (i18n::START_DATE, trip.start_date.clone()),
            (i18n::END_DATE, trip.end_date.clone()),
            (i18n::DESTINATION, trip.destination.clone()),
            (i18n::ACCOMMODATION, trip.accommodation.clone()),
            (
                i18n::TRANSPORT_METHOD,
                transport_label(trip.transport_method).to_string(),
            ),
            (i18n::DRIVER, driver),
            (i18n::TOTAL_FUEL, format_currency(result.total_fuel)),
            (
                i18n::AVERAGE_COST,
                format_currency(result.average_cost_per_person),
            ),
        ]
    }

    pub fn build_expense_table(result: &SettlementResult, names: &[String]) -> Table<'static> {
        let headers = [
            i18n::NAME,
            i18n::FOOD,
            i18n::TRANSPORT,
            i18n::STAY,
            i18n::FUEL,
            i18n::ETC,
            i18n::FUEL_SHARE,
            i18n::TOTAL,
        ];

        result.rows.iter().zip(names).fold(
            Table::new()
                .title(i18n::EXPENSES_HEADING)
                .alignments(&EXPENSE_ALIGNMENTS)
                .headers(headers.map(Cow::Borrowed))
                .emphasize(TOTAL_COLUMN),
            |table, (row, name)| {
                table.row([
                    Cow::Owned(name.clone()),
                    Cow::Owned(format_amount(row.food)),
                    Cow::Owned(format_amount(row.transport)),
                    Cow::Owned(format_amount(row.stay)),
                    Cow::Owned(format_amount(row.fuel)),
                    Cow::Owned(format_amount(row.etc)),
                    Cow::Owned(format_amount(row.fuel_share)),
                    Cow::Owned(format_currency(row.total)),
                ])
            },
        )
    }

    pub fn build_settlement_table(result: &SettlementResult, names: &[String]) -> Table<'static> {
        let mut alignments = vec![Alignment::Right; names.len() + 1];
        alignments[0] = Alignment::Left;

        let headers = std::iter::once(Cow::Borrowed(i18n::NAME))
            .chain(names.iter().cloned().map(Cow::Owned));

        result.matrix.rows().zip(names).fold(
            Table::new()
                .title(i18n::SETTLEMENT_HEADING)
                .alignments(alignments)
                .headers(headers),
            |table, (cells, name)| {
                table.row(
                    std::iter::once(Cow::Owned(name.clone()))
                        .chain(cells.iter().map(|&amount| format_owed(amount))),
                )
            },
        )
    }
}

fn format_owed(amount: i64) -> Cow<'static, str> {
    if amount > 0 {
        Cow::Owned(format!("{}{}", group_thousands(amount), i18n::CURRENCY_SUFFIX))
    } else {
        Cow::Borrowed(i18n::NOTHING_OWED)
    }
}

fn display_name(row: &ParticipantRow) -> String {
    if row.name.trim().is_empty() {
        format!("{} {}", i18n::UNNAMED, row.id.index() + 1)
    } else {
        row.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tripsplit_domain::{
        ExpenseCategory, Money, Participant, ParticipantId, Roster, SettlementEngine,
        TransportMethod,
    };

    #[fixture]
    fn trip() -> TripConfig {
        TripConfig {
            start_date: "2024-07-01".to_string(),
            end_date: "2024-07-03".to_string(),
            destination: "Gangneung".to_string(),
            accommodation: "Seaside Inn".to_string(),
            transport_method: TransportMethod::SelfDriven,
        }
    }

    #[fixture]
    fn result(trip: TripConfig) -> SettlementResult {
        let roster = Roster::try_new(vec![
            Participant::new("Driver")
                .with_amount(ExpenseCategory::Stay, Money::from_i64(150_000)),
            Participant::new("Filler").with_amount(ExpenseCategory::Fuel, Money::from_i64(90_000)),
            Participant::new(""),
        ])
        .unwrap();
        SettlementEngine::compute(&roster, &trip, Some(ParticipantId(0))).unwrap()
    }

    #[rstest]
    fn summary_lists_trip_and_aggregates(trip: TripConfig, result: SettlementResult) {
        let view = SettlementPresenter::render(&trip, &result);
        let summary: Vec<String> = view
            .summary
            .iter()
            .map(|(label, value)| format!("{label}={value}"))
            .collect();

        assert!(summary.contains(&format!("{}=Gangneung", i18n::DESTINATION)));
        assert!(summary.contains(&format!("{}=Driver", i18n::DRIVER)));
        assert!(summary.contains(&format!(
            "{}=90,000{}",
            i18n::TOTAL_FUEL,
            i18n::CURRENCY_SUFFIX
        )));
        assert!(summary.contains(&format!(
            "{}=50,000{}",
            i18n::AVERAGE_COST,
            i18n::CURRENCY_SUFFIX
        )));
    }

    #[rstest]
    fn expense_table_formats_amounts(result: SettlementResult) {
        let names: Vec<String> = result.rows.iter().map(display_name).collect();
        let table = SettlementPresenter::build_expense_table(&result, &names);

        assert_eq!(table.headers.len(), 8);
        assert_eq!(table.rows[0][3], "150,000");
        assert_eq!(table.rows[1][6], "45,000");
        assert_eq!(
            table.rows[2][TOTAL_COLUMN],
            format!("-45,000{}", i18n::CURRENCY_SUFFIX)
        );
        assert_eq!(table.rows[2][0], format!("{} 3", i18n::UNNAMED));
    }

    #[rstest]
    fn settlement_table_marks_empty_cells(result: SettlementResult) {
        let names: Vec<String> = result.rows.iter().map(display_name).collect();
        let table = SettlementPresenter::build_settlement_table(&result, &names);

        assert_eq!(table.headers.len(), 4);
        assert_eq!(table.rows[0][1], i18n::NOTHING_OWED);
        // Filler owes Driver a third of the lodging.
        assert_eq!(
            table.rows[1][1],
            format!("50,000{}", i18n::CURRENCY_SUFFIX)
        );
        // Rider owes Filler half of the fuel.
        assert_eq!(
            table.rows[2][2],
            format!("45,000{}", i18n::CURRENCY_SUFFIX)
        );
    }

    #[rstest]
    fn renders_text_and_svg(trip: TripConfig, result: SettlementResult) {
        let view = SettlementPresenter::render(&trip, &result);

        let text = view.to_text();
        assert!(text.starts_with(i18n::RESULT_HEADING));
        assert!(text.contains(i18n::SETTLEMENT_HEADING));
        assert!(text.contains("150,000"));

        let svg = view.to_svg().expect("stacked svg");
        assert!(svg.contains(">Filler</text>"));
        assert!(svg.ends_with("</svg>"));
    }
}
