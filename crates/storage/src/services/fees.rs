use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::fee::FeeBreakdown;
use crate::error::{Result, StorageError};
use crate::models::{MasteryLevel, PerformanceType, RegistrationFeeRecord};

/// Solo package prices for 1 through 5 solos; the 5th comes free with the
/// 4th. Solos beyond the package are priced per solo.
const SOLO_PACKAGE_PRICES: [u32; 5] = [35, 65, 90, 110, 110];
const SOLO_PACKAGE_SIZE: u32 = 5;
const SOLO_ADDITIONAL_PRICE: u32 = 20;

const DUET_TRIO_PER_DANCER: u32 = 25;

/// Group pricing drops to the large-group rate at 10 dancers.
const SMALL_GROUP_PER_DANCER: u32 = 20;
const LARGE_GROUP_PER_DANCER: u32 = 15;
const LARGE_GROUP_MIN_SIZE: usize = 10;

/// Per-dancer registration fee by mastery level.
pub fn registration_fee_rate(level: MasteryLevel) -> Decimal {
    let rate = match level {
        MasteryLevel::Water => 15,
        MasteryLevel::Fire => 25,
    };
    Decimal::from(rate as u32)
}

/// One roster member as the fee calculator sees them: identity, display
/// name for the rationale string, and a snapshot of their fee record.
#[derive(Debug, Clone)]
pub struct FeeParticipant {
    pub dancer_id: Uuid,
    pub display_name: String,
    pub fee_record: RegistrationFeeRecord,
}

/// Compute the fee breakdown for one entry. Pure over its inputs: identical
/// arguments (including identical fee-record snapshots) produce an
/// identical breakdown, and registration-fee state is never written here.
pub fn compute_fee(
    performance_type: PerformanceType,
    mastery_level: MasteryLevel,
    participants: &[FeeParticipant],
    solo_count: Option<u32>,
) -> Result<FeeBreakdown> {
    if participants.is_empty() {
        return Err(StorageError::InvalidInput(
            "at least one participant is required".to_string(),
        ));
    }

    let (performance_fee, performance_text) =
        performance_fee(performance_type, participants.len(), solo_count)?;
    let (registration_fee, registration_breakdown) =
        registration_fee_owed(mastery_level, participants);
    let total_fee = registration_fee + performance_fee;

    Ok(FeeBreakdown {
        registration_fee,
        performance_fee,
        total_fee,
        breakdown: format!(
            "{performance_text}; registration {registration_fee}; total {total_fee}"
        ),
        registration_breakdown,
    })
}

fn performance_fee(
    performance_type: PerformanceType,
    participant_count: usize,
    solo_count: Option<u32>,
) -> Result<(Decimal, String)> {
    match performance_type {
        PerformanceType::Solo => {
            let count = solo_count.unwrap_or(1);
            if count < 1 {
                return Err(StorageError::InvalidInput(
                    "solo_count must be at least 1".to_string(),
                ));
            }
            let fee = if count <= SOLO_PACKAGE_SIZE {
                SOLO_PACKAGE_PRICES[(count - 1) as usize]
            } else {
                SOLO_PACKAGE_PRICES[(SOLO_PACKAGE_SIZE - 1) as usize]
                    + (count - SOLO_PACKAGE_SIZE) * SOLO_ADDITIONAL_PRICE
            };
            let fee = Decimal::from(fee);
            Ok((fee, format!("solo package of {count}: {fee}")))
        }
        PerformanceType::Duet | PerformanceType::Trio => {
            let rate = Decimal::from(DUET_TRIO_PER_DANCER);
            let fee = rate * Decimal::from(participant_count as u64);
            Ok((
                fee,
                format!("{performance_type}: {participant_count} dancers x {rate} = {fee}"),
            ))
        }
        PerformanceType::Group => {
            let per_dancer = if participant_count >= LARGE_GROUP_MIN_SIZE {
                LARGE_GROUP_PER_DANCER
            } else {
                SMALL_GROUP_PER_DANCER
            };
            let rate = Decimal::from(per_dancer);
            let fee = rate * Decimal::from(participant_count as u64);
            Ok((
                fee,
                format!("group of {participant_count}: {participant_count} x {rate} = {fee}"),
            ))
        }
    }
}

/// Registration fee summed over the participants whose record does not
/// satisfy the requested mastery level. The rationale names who still owes.
fn registration_fee_owed(
    mastery_level: MasteryLevel,
    participants: &[FeeParticipant],
) -> (Decimal, String) {
    let rate = registration_fee_rate(mastery_level);
    let owing: Vec<&FeeParticipant> = participants
        .iter()
        .filter(|p| !p.fee_record.satisfies(mastery_level))
        .collect();
    let fee = rate * Decimal::from(owing.len() as u64);

    let total = participants.len();
    let text = match owing.len() {
        0 => format!(
            "no registration fee due: all {total} dancer(s) already paid for {}",
            mastery_level.label()
        ),
        n if n == total => format!(
            "all {total} dancer(s) owe the {} registration fee of {rate} each",
            mastery_level.label()
        ),
        n => {
            let names: Vec<&str> = owing.iter().map(|p| p.display_name.as_str()).collect();
            format!(
                "{n} of {total} dancers owe the {} registration fee of {rate} each (still owing: {})",
                mastery_level.label(),
                names.join(", ")
            )
        }
    };

    (fee, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unpaid(name: &str) -> FeeParticipant {
        let dancer_id = Uuid::new_v4();
        FeeParticipant {
            dancer_id,
            display_name: name.to_string(),
            fee_record: RegistrationFeeRecord::unpaid(dancer_id),
        }
    }

    fn paid(name: &str, level: MasteryLevel) -> FeeParticipant {
        let dancer_id = Uuid::new_v4();
        FeeParticipant {
            dancer_id,
            display_name: name.to_string(),
            fee_record: RegistrationFeeRecord {
                dancer_id,
                paid: true,
                paid_mastery_level: Some(level.as_str().to_string()),
                paid_at: None,
            },
        }
    }

    #[test]
    fn empty_roster_is_rejected() {
        let result = compute_fee(PerformanceType::Solo, MasteryLevel::Water, &[], Some(1));
        assert!(matches!(result, Err(StorageError::InvalidInput(_))));
    }

    #[test]
    fn zero_solo_count_is_rejected() {
        let roster = [unpaid("Mira Voss")];
        let result = compute_fee(PerformanceType::Solo, MasteryLevel::Water, &roster, Some(0));
        assert!(matches!(result, Err(StorageError::InvalidInput(_))));
    }

    #[test]
    fn fifth_solo_is_free() {
        let roster = [paid("Mira Voss", MasteryLevel::Water)];
        let four = compute_fee(PerformanceType::Solo, MasteryLevel::Water, &roster, Some(4)).unwrap();
        let five = compute_fee(PerformanceType::Solo, MasteryLevel::Water, &roster, Some(5)).unwrap();
        assert_eq!(four.performance_fee, five.performance_fee);
    }

    #[test]
    fn sixth_solo_adds_the_per_solo_price() {
        let roster = [paid("Mira Voss", MasteryLevel::Water)];
        let five = compute_fee(PerformanceType::Solo, MasteryLevel::Water, &roster, Some(5)).unwrap();
        let six = compute_fee(PerformanceType::Solo, MasteryLevel::Water, &roster, Some(6)).unwrap();
        assert_eq!(
            six.performance_fee,
            five.performance_fee + Decimal::from(SOLO_ADDITIONAL_PRICE)
        );
    }

    #[test]
    fn solo_count_defaults_to_one() {
        let roster = [paid("Mira Voss", MasteryLevel::Water)];
        let implicit = compute_fee(PerformanceType::Solo, MasteryLevel::Water, &roster, None).unwrap();
        let explicit =
            compute_fee(PerformanceType::Solo, MasteryLevel::Water, &roster, Some(1)).unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn duet_with_two_unpaid_fire_dancers() {
        let roster = [unpaid("Mira Voss"), unpaid("Jonas Brandt")];
        let quote = compute_fee(PerformanceType::Duet, MasteryLevel::Fire, &roster, None).unwrap();

        let registration = registration_fee_rate(MasteryLevel::Fire) * Decimal::from(2u32);
        let performance = Decimal::from(DUET_TRIO_PER_DANCER) * Decimal::from(2u32);
        assert_eq!(quote.registration_fee, registration);
        assert_eq!(quote.performance_fee, performance);
        assert_eq!(quote.total_fee, registration + performance);
    }

    #[test]
    fn partial_owing_charges_only_the_owing_dancers() {
        let roster = [
            paid("Mira Voss", MasteryLevel::Fire),
            unpaid("Jonas Brandt"),
            unpaid("Lena Okafor"),
        ];
        let quote = compute_fee(PerformanceType::Trio, MasteryLevel::Fire, &roster, None).unwrap();

        assert_eq!(
            quote.registration_fee,
            registration_fee_rate(MasteryLevel::Fire) * Decimal::from(2u32)
        );
        assert!(quote.registration_breakdown.contains("2 of 3"));
        assert!(quote.registration_breakdown.contains("Jonas Brandt"));
        assert!(quote.registration_breakdown.contains("Lena Okafor"));
        assert!(!quote.registration_breakdown.contains("Mira Voss"));
    }

    #[test]
    fn payment_under_another_level_does_not_count() {
        let roster = [paid("Mira Voss", MasteryLevel::Water)];
        let quote = compute_fee(PerformanceType::Solo, MasteryLevel::Fire, &roster, Some(1)).unwrap();
        assert_eq!(quote.registration_fee, registration_fee_rate(MasteryLevel::Fire));
        assert!(quote.registration_breakdown.contains("all 1 dancer(s) owe"));
    }

    #[test]
    fn none_owing_yields_zero_registration_fee() {
        let roster = [
            paid("Mira Voss", MasteryLevel::Water),
            paid("Jonas Brandt", MasteryLevel::Water),
        ];
        let quote = compute_fee(PerformanceType::Duet, MasteryLevel::Water, &roster, None).unwrap();
        assert_eq!(quote.registration_fee, Decimal::ZERO);
        assert!(quote.registration_breakdown.contains("no registration fee due"));
    }

    #[test]
    fn group_pricing_drops_at_ten_dancers() {
        let nine: Vec<FeeParticipant> = (0..9)
            .map(|i| paid(&format!("Dancer {i}"), MasteryLevel::Water))
            .collect();
        let ten: Vec<FeeParticipant> = (0..10)
            .map(|i| paid(&format!("Dancer {i}"), MasteryLevel::Water))
            .collect();

        let small = compute_fee(PerformanceType::Group, MasteryLevel::Water, &nine, None).unwrap();
        let large = compute_fee(PerformanceType::Group, MasteryLevel::Water, &ten, None).unwrap();

        assert_eq!(
            small.performance_fee,
            Decimal::from(SMALL_GROUP_PER_DANCER) * Decimal::from(9u32)
        );
        assert_eq!(
            large.performance_fee,
            Decimal::from(LARGE_GROUP_PER_DANCER) * Decimal::from(10u32)
        );
    }

    #[test]
    fn identical_inputs_yield_identical_breakdowns() {
        let roster = [paid("Mira Voss", MasteryLevel::Fire), unpaid("Jonas Brandt")];
        let first = compute_fee(PerformanceType::Duet, MasteryLevel::Fire, &roster, None).unwrap();
        let second = compute_fee(PerformanceType::Duet, MasteryLevel::Fire, &roster, None).unwrap();
        assert_eq!(first, second);
    }
}
