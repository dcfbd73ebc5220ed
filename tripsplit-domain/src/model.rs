use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

/// Amount of money in the trip currency.
///
/// Backed by a decimal so that even splits such as `100 / 3` stay exact until the
/// final whole-unit rounding. Arithmetic saturates at the decimal range instead of
/// panicking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    /// Largest whole-unit amount accepted for a single expense field.
    pub const MAX_FIELD_UNITS: i64 = 1_000_000_000_000_000;

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn exceeds_field_limit(self) -> bool {
        self.0 > Decimal::from(Self::MAX_FIELD_UNITS)
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Splits the amount evenly into `parts`. Zero parts yields zero.
    pub fn split(self, parts: usize) -> Self {
        if parts == 0 {
            return Self::ZERO;
        }
        Self(self.0 / Decimal::from(parts))
    }

    /// Rounds to whole currency units, half away from zero.
    pub fn round_half_up(self) -> i64 {
        let rounded = self
            .0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Position of a participant in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub usize);

impl ParticipantId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Stay,
    Fuel,
    Etc,
}

impl ExpenseCategory {
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::Transport,
        Self::Stay,
        Self::Fuel,
        Self::Etc,
    ];

    /// Categories split evenly across the whole roster.
    pub const SHARED: [Self; 4] = [Self::Food, Self::Transport, Self::Stay, Self::Etc];

    pub fn key(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Stay => "stay",
            Self::Fuel => "fuel",
            Self::Etc => "etc",
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = UnknownExpenseCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownExpenseCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown expense category '{0}'")]
pub struct UnknownExpenseCategory(pub String);

/// One trip member and what they paid out of pocket per category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub food: Money,
    pub transport: Money,
    pub stay: Money,
    pub fuel: Money,
    pub etc: Money,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_amount(mut self, category: ExpenseCategory, amount: Money) -> Self {
        self.set_amount(category, amount);
        self
    }

    pub fn amount(&self, category: ExpenseCategory) -> Money {
        match category {
            ExpenseCategory::Food => self.food,
            ExpenseCategory::Transport => self.transport,
            ExpenseCategory::Stay => self.stay,
            ExpenseCategory::Fuel => self.fuel,
            ExpenseCategory::Etc => self.etc,
        }
    }

    pub fn set_amount(&mut self, category: ExpenseCategory, amount: Money) {
        let slot = match category {
            ExpenseCategory::Food => &mut self.food,
            ExpenseCategory::Transport => &mut self.transport,
            ExpenseCategory::Stay => &mut self.stay,
            ExpenseCategory::Fuel => &mut self.fuel,
            ExpenseCategory::Etc => &mut self.etc,
        };
        *slot = amount;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("roster must contain at least one participant")]
    Empty,
    #[error("cannot remove the last participant")]
    LastParticipant,
    #[error("participant {index} does not exist (roster size {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Non-empty, ordered list of participants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn try_new(participants: Vec<Participant>) -> Result<Self, RosterError> {
        if participants.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { participants })
    }

    /// A roster holding a single unnamed participant with zero amounts.
    pub fn single_blank() -> Self {
        Self {
            participants: vec![Participant::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    // A roster is never empty; provided for clippy's len_without_is_empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        (0..self.participants.len()).map(ParticipantId)
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(id.0)
    }

    pub fn get_mut(&mut self, id: ParticipantId) -> Result<&mut Participant, RosterError> {
        let len = self.participants.len();
        self.participants
            .get_mut(id.0)
            .ok_or(RosterError::OutOfRange { index: id.0, len })
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        id.0 < self.participants.len()
    }

    pub fn push(&mut self, participant: Participant) -> ParticipantId {
        self.participants.push(participant);
        ParticipantId(self.participants.len() - 1)
    }

    pub fn remove(&mut self, id: ParticipantId) -> Result<Participant, RosterError> {
        let len = self.participants.len();
        if id.0 >= len {
            return Err(RosterError::OutOfRange { index: id.0, len });
        }
        if len == 1 {
            return Err(RosterError::LastParticipant);
        }
        Ok(self.participants.remove(id.0))
    }

    /// Sum of one category across every participant.
    pub fn category_total(&self, category: ExpenseCategory) -> Money {
        self.participants.iter().map(|p| p.amount(category)).sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransportMethod {
    #[default]
    PublicTransit,
    SelfDriven,
}

impl TransportMethod {
    pub fn key(self) -> &'static str {
        match self {
            Self::PublicTransit => "public-transit",
            Self::SelfDriven => "self-driven",
        }
    }

    pub fn is_self_driven(self) -> bool {
        matches!(self, Self::SelfDriven)
    }
}

impl FromStr for TransportMethod {
    type Err = UnknownTransportMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            value if value.eq_ignore_ascii_case("public-transit") => Ok(Self::PublicTransit),
            value if value.eq_ignore_ascii_case("self-driven") => Ok(Self::SelfDriven),
            "대중교통" => Ok(Self::PublicTransit),
            "자차" => Ok(Self::SelfDriven),
            other => Err(UnknownTransportMethod(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport method '{0}'")]
pub struct UnknownTransportMethod(pub String);

/// Descriptive trip metadata. Only the transport method affects settlement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripConfig {
    pub start_date: String,
    pub end_date: String,
    pub destination: String,
    pub accommodation: String,
    pub transport_method: TransportMethod,
}

/// Per-participant line of a computed settlement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub id: ParticipantId,
    pub name: String,
    pub food: Money,
    pub transport: Money,
    pub stay: Money,
    pub fuel: Money,
    pub etc: Money,
    pub fuel_share: Money,
    pub total: Money,
}

impl ParticipantRow {
    pub fn amount(&self, category: ExpenseCategory) -> Money {
        match category {
            ExpenseCategory::Food => self.food,
            ExpenseCategory::Transport => self.transport,
            ExpenseCategory::Stay => self.stay,
            ExpenseCategory::Fuel => self.fuel,
            ExpenseCategory::Etc => self.etc,
        }
    }

    /// What the participant paid across all categories, before fuel sharing.
    pub fn paid(&self) -> Money {
        ExpenseCategory::ALL
            .into_iter()
            .map(|category| self.amount(category))
            .sum()
    }
}

/// Square grid where `get(i, j)` is the whole-unit amount participant `i` owes `j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementMatrix {
    size: usize,
    cells: Vec<i64>,
}

impl SettlementMatrix {
    pub(crate) fn from_cells(size: usize, cells: Vec<i64>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, debtor: ParticipantId, creditor: ParticipantId) -> i64 {
        if debtor.0 >= self.size || creditor.0 >= self.size {
            return 0;
        }
        self.cells[debtor.0 * self.size + creditor.0]
    }

    pub fn row(&self, debtor: ParticipantId) -> &[i64] {
        let start = debtor.0 * self.size;
        self.cells.get(start..start + self.size).unwrap_or(&[])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Total `debtor` owes everyone else.
    pub fn owed_by(&self, debtor: ParticipantId) -> i64 {
        self.row(debtor).iter().sum()
    }

    /// Total everyone else owes `creditor`.
    pub fn owed_to(&self, creditor: ParticipantId) -> i64 {
        if creditor.0 >= self.size {
            return 0;
        }
        self.rows().map(|row| row[creditor.0]).sum()
    }

    pub fn to_vecs(&self) -> Vec<Vec<i64>> {
        self.rows().map(<[i64]>::to_vec).collect()
    }
}

/// Output of one settlement computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementResult {
    pub driver: Option<ParticipantId>,
    pub driver_name: Option<String>,
    pub total_fuel: Money,
    pub rows: Vec<ParticipantRow>,
    pub average_cost_per_person: Money,
    pub matrix: SettlementMatrix,
}

impl SettlementResult {
    pub fn total_cost(&self) -> Money {
        self.rows.iter().map(|row| row.total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact(Money::from_i64(50), 50)]
    #[case::half_rounds_up(Money::new(505, 1), 51)]
    #[case::below_half(Money::new(5049, 2), 50)]
    #[case::third(Money::from_i64(100).split(3), 33)]
    #[case::two_thirds(Money::from_i64(200).split(3), 67)]
    #[case::negative_half(Money::new(-25, 1), -3)]
    fn money_rounds_half_up(#[case] money: Money, #[case] expected: i64) {
        assert_eq!(money.round_half_up(), expected);
    }

    #[rstest]
    fn arithmetic_saturates_at_decimal_range() {
        let max = Money::from_decimal(Decimal::MAX);
        assert_eq!(max + max, max);
        assert_eq!([max, max, max].iter().sum::<Money>(), max);
        let min = Money::from_decimal(Decimal::MIN);
        assert_eq!(min - max, min);
        assert_eq!(max.round_half_up(), i64::MAX);
    }

    #[rstest]
    #[case::at_limit(Money::from_i64(Money::MAX_FIELD_UNITS), false)]
    #[case::above_limit(Money::from_i64(Money::MAX_FIELD_UNITS + 1), true)]
    #[case::fraction_above(Money::from_i64(Money::MAX_FIELD_UNITS) + Money::new(1, 2), true)]
    fn detects_field_limit(#[case] money: Money, #[case] expected: bool) {
        assert_eq!(money.exceeds_field_limit(), expected);
    }

    #[rstest]
    fn split_by_zero_is_zero() {
        assert_eq!(Money::from_i64(90).split(0), Money::ZERO);
    }

    #[rstest]
    #[case::english("self-driven", TransportMethod::SelfDriven)]
    #[case::english_upper("PUBLIC-TRANSIT", TransportMethod::PublicTransit)]
    #[case::korean_car("자차", TransportMethod::SelfDriven)]
    #[case::korean_transit("대중교통", TransportMethod::PublicTransit)]
    fn parses_transport_method(#[case] input: &str, #[case] expected: TransportMethod) {
        assert_eq!(input.parse::<TransportMethod>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_transport_method() {
        assert_eq!(
            "bicycle".parse::<TransportMethod>(),
            Err(UnknownTransportMethod("bicycle".to_string()))
        );
    }

    #[rstest]
    #[case::food("food", ExpenseCategory::Food)]
    #[case::stay_upper("STAY", ExpenseCategory::Stay)]
    #[case::etc("etc", ExpenseCategory::Etc)]
    fn parses_category(#[case] input: &str, #[case] expected: ExpenseCategory) {
        assert_eq!(input.parse::<ExpenseCategory>(), Ok(expected));
    }

    #[rstest]
    fn roster_rejects_empty() {
        assert_eq!(Roster::try_new(Vec::new()), Err(RosterError::Empty));
    }

    #[rstest]
    fn roster_keeps_last_participant() {
        let mut roster = Roster::single_blank();
        assert_eq!(
            roster.remove(ParticipantId(0)),
            Err(RosterError::LastParticipant)
        );
        assert_eq!(roster.len(), 1);
    }

    #[rstest]
    fn roster_remove_out_of_range() {
        let mut roster =
            Roster::try_new(vec![Participant::new("A"), Participant::new("B")]).unwrap();
        assert_eq!(
            roster.remove(ParticipantId(5)),
            Err(RosterError::OutOfRange { index: 5, len: 2 })
        );
    }

    #[rstest]
    fn category_total_sums_roster() {
        let roster = Roster::try_new(vec![
            Participant::new("A").with_amount(ExpenseCategory::Food, Money::from_i64(30)),
            Participant::new("B").with_amount(ExpenseCategory::Food, Money::from_i64(12)),
        ])
        .unwrap();
        assert_eq!(
            roster.category_total(ExpenseCategory::Food),
            Money::from_i64(42)
        );
        assert_eq!(roster.category_total(ExpenseCategory::Stay), Money::ZERO);
    }

    #[rstest]
    fn matrix_accessors() {
        let matrix = SettlementMatrix::from_cells(2, vec![0, 5, 7, 0]);
        assert_eq!(matrix.get(ParticipantId(0), ParticipantId(1)), 5);
        assert_eq!(matrix.get(ParticipantId(1), ParticipantId(0)), 7);
        assert_eq!(matrix.owed_by(ParticipantId(1)), 7);
        assert_eq!(matrix.owed_to(ParticipantId(1)), 5);
        assert_eq!(matrix.to_vecs(), vec![vec![0, 5], vec![7, 0]]);
        assert_eq!(matrix.get(ParticipantId(3), ParticipantId(0)), 0);
    }
}
