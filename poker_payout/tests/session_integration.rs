//! Integration tests for a full tournament session.
//!
//! Tests the flow a front end drives: configure the tournament, edit weights,
//! record payments as players arrive, change the field size, knock players
//! out and pay the winners, recomputing the plan and summary after each step.

use poker_payout::{
    PaymentField, TournamentConfig, TournamentSession, WeightSet,
    report::{render_ledger, render_payouts},
    tournament::{PayoutError, SessionError},
};

/// Helper to mark every player fully paid
fn collect_everyone(session: &mut TournamentSession) {
    for i in 0..session.ledger().len() {
        session.set_all_flag(i, true).unwrap();
    }
}

#[test]
fn test_full_evening() {
    let mut session = TournamentSession::new(TournamentConfig::new(9, 20.0, 5.0, 2.0)).unwrap();

    // Players trickle in and pay in pieces
    session.rename_player(0, "Alice").unwrap();
    session.set_payment_flag(0, PaymentField::BuyIn, true).unwrap();
    session.set_payment_flag(0, PaymentField::Food, true).unwrap();
    assert!(!session.player(0).unwrap().all);
    session.set_payment_flag(0, PaymentField::Bounty, true).unwrap();
    assert!(session.player(0).unwrap().all);

    let summary = session.summary();
    assert_eq!(summary.total_pool, 243.0);
    assert_eq!(summary.total_paid, 27.0);

    // Two late arrivals
    session.set_players(11).unwrap();
    assert_eq!(session.player(0).unwrap().name, "Alice");
    assert_eq!(session.player(10).unwrap().name, "Player 11");
    collect_everyone(&mut session);

    let summary = session.summary();
    assert_eq!(summary.total_pool, 297.0);
    assert_eq!(summary.total_paid, 297.0);
    assert!((summary.percent_paid - 100.0).abs() < 1e-9);

    let plan = session.payout_plan().unwrap();
    assert_eq!(plan.prize_pool, 220.0);
    assert_eq!(plan.paying_positions, 3);

    // Knockouts
    for i in 3..11 {
        session.set_eliminated(i, true).unwrap();
    }
    assert_eq!(session.summary().active_players, 3);

    // Pay the top three
    for i in 0..3 {
        session.set_payed_out(i, true).unwrap();
    }
    let summary = session.summary();
    assert_eq!(summary.payed_out_count, 3);

    let ledger_text = render_ledger(session.ledger(), &summary);
    assert!(ledger_text.contains("Collected: $297.00 of $297.00 (100.0%)"));
    assert!(ledger_text.contains("Players remaining: 3 of 11"));
}

#[test]
fn test_unchecking_payment_clears_all() {
    let mut session = TournamentSession::default();
    session.set_all_flag(2, true).unwrap();
    session.set_payment_flag(2, PaymentField::Food, false).unwrap();
    let record = session.player(2).unwrap();
    assert!(!record.all);
    assert!(record.paid_buy_in);
    assert!(!record.paid_food);
    assert!(record.paid_bounty);
    assert_eq!(session.summary().total_paid, 22.0);
}

#[test]
fn test_all_flag_does_not_touch_status() {
    let mut session = TournamentSession::default();
    session.set_eliminated(4, true).unwrap();
    session.set_payed_out(4, true).unwrap();
    session.set_all_flag(4, false).unwrap();
    let record = session.player(4).unwrap();
    assert!(record.eliminated);
    assert!(record.payed_out);
}

#[test]
fn test_shrinking_field_drops_tail_records() {
    let mut session = TournamentSession::default();
    collect_everyone(&mut session);
    session.set_players(6).unwrap();
    assert_eq!(session.ledger().len(), 6);
    assert_eq!(session.summary().total_paid, 6.0 * 27.0);

    session.set_players(8).unwrap();
    assert!(!session.player(7).unwrap().all);
    assert_eq!(session.summary().total_paid, 6.0 * 27.0);
}

#[test]
fn test_editing_working_copy_of_weights() {
    let mut session = TournamentSession::new(TournamentConfig::new(30, 10.0, 0.0, 0.0)).unwrap();
    let committed = session.payout_plan().unwrap();

    let mut working: WeightSet = session.weights().clone();
    working.set_at(0, 100).unwrap();
    // Not committed yet
    assert_eq!(session.payout_plan().unwrap(), committed);

    session.set_weights(working);
    let updated = session.payout_plan().unwrap();
    assert!(updated.payouts[0].amount > committed.payouts[0].amount);
}

#[test]
fn test_weight_removal_guard() {
    let mut session = TournamentSession::default();
    session.set_weights(WeightSet::from_weights(vec![1]).unwrap());
    assert!(matches!(
        session.remove_last_weight(),
        Err(SessionError::Payout(PayoutError::InvalidOperation(_)))
    ));
    assert_eq!(session.weights().len(), 1);
    assert_eq!(session.payout_plan().unwrap().paying_positions, 1);
}

#[test]
fn test_invalid_player_index_reports_ledger_error() {
    let mut session = TournamentSession::default();
    let err = session.set_payed_out(9, true).unwrap_err();
    assert!(matches!(err, SessionError::Ledger(_)));
    assert!(err.to_string().contains("Player 10 not found"));
}

#[test]
fn test_zero_money_tournament() {
    let mut session = TournamentSession::new(TournamentConfig::new(5, 0.0, 0.0, 0.0)).unwrap();
    collect_everyone(&mut session);
    let summary = session.summary();
    assert_eq!(summary.percent_paid, 0.0);

    let plan = session.payout_plan().unwrap();
    assert_eq!(plan.total_paid(), 0.0);
    let text = render_payouts(&plan, 5);
    assert!(text.contains("1st Place:      $0.00"));
}

#[test]
fn test_invalid_config_never_builds_a_session() {
    let err = TournamentSession::new(TournamentConfig::new(0, -5.0, 0.0, 0.0)).unwrap_err();
    assert!(matches!(err, SessionError::Payout(PayoutError::InvalidInput(_))));
    assert!(err.to_string().contains("Player count"));
}
