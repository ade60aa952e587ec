//! # Audit Scenarios
//!
//! Catalog seeding, mutation and aggregation across the catalog and state
//! crates, including the reference scenarios for the compliance
//! percentage and unknown-item handling.

use labelcheck_catalog::Catalog;
use labelcheck_core::{AuditStatus, ChecklistItem, ConfigurationError, StateError};
use labelcheck_state::{AnswerSheet, AuditState, DisplayFilter};

/// The first `n` items of the built-in catalog.
fn builtin_prefix(n: usize) -> Catalog {
    let builtin = Catalog::builtin().unwrap();
    Catalog::new("prefix", builtin.items()[..n].to_vec()).unwrap()
}

fn titles(catalog: &Catalog) -> Vec<String> {
    catalog.titles().map(str::to_string).collect()
}

// ── reference scenarios ──────────────────────────────────────────────

#[test]
fn scenario_a_three_items_mixed() {
    let catalog = builtin_prefix(3);
    let t = titles(&catalog);
    let mut state = AuditState::seeded(&catalog);
    state.set_status(&t[0], AuditStatus::Compliant).unwrap();
    state.set_status(&t[1], AuditStatus::NonCompliant).unwrap();
    state.set_status(&t[2], AuditStatus::NotApplicable).unwrap();

    let stats = state.compute_aggregates();
    assert_eq!(stats.answered(), 2);
    assert_eq!(stats.compliance_percentage(), 50);
}

#[test]
fn scenario_b_five_unanswered() {
    let catalog = builtin_prefix(5);
    let state = AuditState::seeded(&catalog);
    let stats = state.compute_aggregates();
    assert_eq!(stats.answered(), 0);
    assert_eq!(stats.compliance_percentage(), 0);
    assert_eq!(stats.unanswered, 5);
}

#[test]
fn scenario_d_unknown_title() {
    let catalog = builtin_prefix(5);
    let mut state = AuditState::seeded(&catalog);
    assert_eq!(
        state.set_status("nonexistent-title", AuditStatus::Compliant),
        Err(StateError::unknown("nonexistent-title"))
    );
    assert_eq!(
        state.set_note("nonexistent-title", "x"),
        Err(StateError::unknown("nonexistent-title"))
    );
}

// ── lifecycle ────────────────────────────────────────────────────────

#[test]
fn reinitialize_resumes_session() {
    let catalog = Catalog::builtin().unwrap();
    let t = titles(&catalog);
    let mut state = AuditState::seeded(&catalog);
    state.set_status(&t[4], AuditStatus::NonCompliant).unwrap();
    state.set_note(&t[4], "Fecha borrosa").unwrap();

    assert_eq!(state.initialize(&catalog), 0);
    let entry = state.entry(&t[4]).unwrap();
    assert_eq!(entry.status, AuditStatus::NonCompliant);
    assert_eq!(entry.note, "Fecha borrosa");
    assert_eq!(state.len(), catalog.len());
}

#[test]
fn bulk_actions_cover_whole_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let t = titles(&catalog);
    let mut state = AuditState::seeded(&catalog);
    state.set_note(&t[0], "revisar").unwrap();

    state.mark_all_not_applicable();
    let stats = state.compute_aggregates();
    assert_eq!(stats.not_applicable, catalog.len());
    assert_eq!(state.entry(&t[0]).unwrap().note, "revisar");

    state.reset_all();
    let stats = state.compute_aggregates();
    assert_eq!(stats.unanswered, catalog.len());
    assert_eq!(state.entry(&t[0]).unwrap().note, "");
}

#[test]
fn filter_never_changes_totals() {
    let catalog = Catalog::builtin().unwrap();
    let t = titles(&catalog);
    let mut state = AuditState::seeded(&catalog);
    state.set_status(&t[0], AuditStatus::NonCompliant).unwrap();
    state.set_status(&t[1], AuditStatus::Compliant).unwrap();

    let only = state
        .visible_items(&catalog, DisplayFilter::NonCompliantOnly)
        .unwrap();
    assert_eq!(only.len(), 1);
    assert_eq!(state.rows(&catalog).unwrap().len(), catalog.len());
    assert_eq!(state.compute_aggregates().compliance_percentage(), 50);
}

#[test]
fn category_breakdown_partitions_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let state = AuditState::seeded(&catalog);
    let breakdown = state.category_breakdown(&catalog);
    let total: usize = breakdown.iter().map(|c| c.stats.total).sum();
    assert_eq!(total, catalog.len());
    assert_eq!(breakdown.len(), catalog.categories().len());
}

// ── answer sheets ────────────────────────────────────────────────────

#[test]
fn answer_sheet_with_legacy_codes() {
    let catalog = builtin_prefix(4);
    let t = titles(&catalog);
    let yaml = format!(
        "answers:\n  - title: \"{}\"\n    status: yes\n  - title: \"{}\"\n    status: no\n  - title: \"{}\"\n    status: na\n  - title: \"{}\"\n    status: none\n",
        t[0], t[1], t[2], t[3]
    );
    let sheet = AnswerSheet::from_yaml_str(&yaml).unwrap();
    let mut state = AuditState::seeded(&catalog);
    sheet.apply(&mut state).unwrap();
    let stats = state.compute_aggregates();
    assert_eq!(
        (stats.compliant, stats.non_compliant, stats.not_applicable, stats.unanswered),
        (1, 1, 1, 1)
    );
}

// ── catalog validation ───────────────────────────────────────────────

#[test]
fn duplicate_titles_across_categories_rejected() {
    let item = |category: &str| ChecklistItem {
        category: category.into(),
        title: "Lote visible".into(),
        what_to_check: "Lote impreso".into(),
        recommendation: "Imprimir lote".into(),
        reference: "Res. 5109".into(),
        severity: None,
        applicability: None,
    };
    let err = Catalog::new("dup", vec![item("A"), item("B")]).unwrap_err();
    assert!(matches!(err, ConfigurationError::DuplicateTitle { .. }));
}

#[test]
fn builtin_titles_are_unique() {
    let catalog = Catalog::builtin().unwrap();
    let mut t = titles(&catalog);
    t.sort();
    t.dedup();
    assert_eq!(t.len(), catalog.len());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn status() -> impl Strategy<Value = AuditStatus> {
        prop_oneof![
            Just(AuditStatus::Compliant),
            Just(AuditStatus::NonCompliant),
            Just(AuditStatus::NotApplicable),
            Just(AuditStatus::Unanswered),
        ]
    }

    proptest! {
        /// Marking one more builtin item not-applicable or unanswered never
        /// moves the percentage.
        #[test]
        fn percentage_stable_when_item_becomes_undecided(
            statuses in proptest::collection::vec(status(), 20),
            pick in 0usize..20,
            to_na in any::<bool>(),
        ) {
            let catalog = Catalog::builtin().unwrap();
            let t = titles(&catalog);
            let mut state = AuditState::seeded(&catalog);
            for (title, s) in t.iter().zip(&statuses) {
                state.set_status(title, *s).unwrap();
            }
            prop_assume!(!statuses[pick].is_decided());
            let before = state.compute_aggregates().compliance_percentage();
            let undecided = if to_na { AuditStatus::NotApplicable } else { AuditStatus::Unanswered };
            state.set_status(&t[pick], undecided).unwrap();
            prop_assert_eq!(state.compute_aggregates().compliance_percentage(), before);
            prop_assert!(before <= 100);
        }
    }
}
