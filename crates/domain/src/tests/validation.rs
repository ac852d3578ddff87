// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_config, create_test_person, date};
use crate::{
    Assignment, BlockReason, ConflictReason, Evaluation, Person, PersonId, RosterConfig, Team,
    evaluate_assignment, validate_person_fields,
};
use chrono::NaiveDate;

fn assignment(id: &str) -> Assignment {
    Assignment::new(PersonId::new(String::from(id)), false)
}

#[test]
fn test_clean_assignment_is_allowed_without_conflict() {
    let config: RosterConfig = create_test_config();
    // 2025-04-10 is an ALFA duty day; a CHARLIE member is clean.
    let person: Person = create_test_person("p1", Team::Charlie);

    let result: Evaluation =
        evaluate_assignment(&config, &person, date(2025, 4, 10), &[], 0, false);
    assert_eq!(
        result,
        Evaluation::Allowed {
            has_conflict: false
        }
    );
}

#[test]
fn test_duplicate_assignment_is_blocked() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p1", Team::Charlie);
    let day: Vec<Assignment> = vec![assignment("p1")];

    let result: Evaluation =
        evaluate_assignment(&config, &person, date(2025, 4, 10), &day, 0, false);
    assert!(matches!(
        result,
        Evaluation::Blocked(BlockReason::DuplicateAssignment { .. })
    ));
}

#[test]
fn test_duplicate_wins_over_capacity() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p1", Team::Charlie);
    let day: Vec<Assignment> = vec![assignment("p1"), assignment("p2"), assignment("p3")];

    // The date is full AND the person is already on it; the duplicate
    // rule has precedence.
    let result: Evaluation =
        evaluate_assignment(&config, &person, date(2025, 4, 10), &day, 0, false);
    assert!(matches!(
        result,
        Evaluation::Blocked(BlockReason::DuplicateAssignment { .. })
    ));
}

#[test]
fn test_full_date_is_blocked() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p4", Team::Charlie);
    let day: Vec<Assignment> = vec![assignment("p1"), assignment("p2"), assignment("p3")];

    let result: Evaluation =
        evaluate_assignment(&config, &person, date(2025, 4, 10), &day, 0, false);
    assert_eq!(
        result,
        Evaluation::Blocked(BlockReason::DailyCapacityExceeded {
            date: date(2025, 4, 10),
            limit: 3,
        })
    );
}

#[test]
fn test_capacity_block_cannot_be_overridden() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p4", Team::Charlie);
    let day: Vec<Assignment> = vec![assignment("p1"), assignment("p2"), assignment("p3")];

    let result: Evaluation = evaluate_assignment(&config, &person, date(2025, 4, 10), &day, 0, true);
    assert!(matches!(
        result,
        Evaluation::Blocked(BlockReason::DailyCapacityExceeded { .. })
    ));
}

#[test]
fn test_own_team_on_duty_requires_confirmation() {
    let config: RosterConfig = create_test_config();
    // 2025-04-10 is an ALFA duty day.
    let person: Person = create_test_person("p1", Team::Alfa);

    let result: Evaluation =
        evaluate_assignment(&config, &person, date(2025, 4, 10), &[], 0, false);
    assert_eq!(
        result,
        Evaluation::ConfirmationRequired(ConflictReason::TeamOnDuty {
            date: date(2025, 4, 10),
            person_id: person.id.clone(),
            team: Team::Alfa,
        })
    );
}

#[test]
fn test_own_team_conflict_proceeds_with_override() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p1", Team::Alfa);

    let result: Evaluation = evaluate_assignment(&config, &person, date(2025, 4, 10), &[], 0, true);
    assert_eq!(result, Evaluation::Allowed { has_conflict: true });
}

#[test]
fn test_monthly_limit_requires_confirmation() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p1", Team::Charlie);

    let result: Evaluation =
        evaluate_assignment(&config, &person, date(2025, 4, 10), &[], 12, false);
    assert!(matches!(
        result,
        Evaluation::ConfirmationRequired(ConflictReason::MonthlyLimitReached { limit: 12, .. })
    ));
}

#[test]
fn test_monthly_limit_proceeds_with_override() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p1", Team::Charlie);

    let result: Evaluation = evaluate_assignment(&config, &person, date(2025, 4, 10), &[], 12, true);
    assert_eq!(result, Evaluation::Allowed { has_conflict: true });
}

#[test]
fn test_team_conflict_checked_before_monthly_limit() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p1", Team::Alfa);

    // Both soft rules apply; without an override, the team conflict is
    // reported first.
    let result: Evaluation =
        evaluate_assignment(&config, &person, date(2025, 4, 10), &[], 12, false);
    assert!(matches!(
        result,
        Evaluation::ConfirmationRequired(ConflictReason::TeamOnDuty { .. })
    ));
}

#[test]
fn test_both_soft_conflicts_collapse_to_single_flag_under_override() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p1", Team::Alfa);

    let result: Evaluation = evaluate_assignment(&config, &person, date(2025, 4, 10), &[], 12, true);
    assert_eq!(result, Evaluation::Allowed { has_conflict: true });
}

#[test]
fn test_below_capacity_date_accepts_assignment() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p3", Team::Charlie);
    let day: Vec<Assignment> = vec![assignment("p1"), assignment("p2")];

    let result: Evaluation =
        evaluate_assignment(&config, &person, date(2025, 4, 10), &day, 0, false);
    assert_eq!(
        result,
        Evaluation::Allowed {
            has_conflict: false
        }
    );
}

#[test]
fn test_day_shift_member_never_triggers_team_conflict() {
    let config: RosterConfig = create_test_config();
    let person: Person = create_test_person("p1", Team::Expediente);
    let start: NaiveDate = date(2025, 4, 1);

    for offset in 0..21 {
        let day: NaiveDate = start + chrono::Duration::days(offset);
        let result: Evaluation = evaluate_assignment(&config, &person, day, &[], 0, false);
        assert_eq!(
            result,
            Evaluation::Allowed {
                has_conflict: false
            }
        );
    }
}

#[test]
fn test_validate_person_fields_accepts_valid_fields() {
    let result = validate_person_fields("SGT", "Silva");
    assert!(result.is_ok());
}

#[test]
fn test_validate_person_fields_rejects_empty_rank() {
    let result = validate_person_fields("", "Silva");
    assert!(matches!(result, Err(crate::DomainError::InvalidRank(_))));
}

#[test]
fn test_validate_person_fields_rejects_blank_name() {
    let result = validate_person_fields("SGT", "   ");
    assert!(matches!(result, Err(crate::DomainError::InvalidName(_))));
}
