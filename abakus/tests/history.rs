use abakus::{History, Operation, Outcome, Record, Summary};
use chrono::{Duration, Local, TimeZone};

#[test]
fn test_records_every_attempt_in_order() {
    let mut history = History::new();
    assert!(history.is_empty());

    let record = history.record(10.0, Operation::Divide, 4.0);
    assert_eq!(record.outcome, Outcome::Value(2.5));
    assert!(record.is_success());

    let record = history.record(10.0, Operation::Divide, 0.0);
    assert_eq!(
        record.outcome,
        Outcome::Failure("Error: Division by zero is not allowed!".to_string())
    );
    assert!(!record.is_success());

    history.record(3.0, Operation::Power, 2.0);

    assert_eq!(history.len(), 3);
    let operands: Vec<_> = history.iter().map(|r| (r.lhs, r.rhs)).collect();
    assert_eq!(operands, [(10.0, 4.0), (10.0, 0.0), (3.0, 2.0)]);
    assert_eq!(history.last().and_then(|r| r.outcome.value()), Some(9.0));

    let timestamps: Vec<_> = history.iter().map(|r| r.timestamp).collect();
    assert!(timestamps.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_formatted_timestamp() {
    let timestamp = Local.ymd(2024, 3, 9).and_hms(7, 5, 3);
    let record = Record::evaluate_at(timestamp, 1.0, Operation::Add, 2.0);
    assert_eq!(record.formatted_timestamp(), "2024-03-09 07:05:03");
}

#[test]
fn test_summary() {
    let start = Local::now();
    let mut history = History::new();
    let calculations = [
        (1.0, Operation::Multiply, 2.0),
        (1.0, Operation::Add, 2.0),
        (1.0, Operation::Divide, 0.0),
        (1.0, Operation::Divide, 0.0),
        (1.0, Operation::Divide, 0.0),
        (1.0, Operation::Add, 2.0),
        (1.0, Operation::Multiply, 2.0),
    ];
    for (i, &(lhs, op, rhs)) in calculations.iter().enumerate() {
        history.push(Record::evaluate_at(
            start + Duration::seconds(i as i64),
            lhs,
            op,
            rhs,
        ));
    }

    // failed divisions do not count, the tie goes to the earlier operation
    assert_eq!(
        history.summary(),
        Summary {
            total: 7,
            successful: 4,
            failed: 3,
            most_used: Some(Operation::Multiply),
        }
    );
}

#[test]
fn test_summary_without_success() {
    let mut history = History::new();
    assert!(history.summary().is_empty());
    assert_eq!(history.summary().most_used, None);

    history.record(1.0, Operation::Modulo, 0.0);
    let summary = history.summary();
    assert!(!summary.is_empty());
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.most_used, None);
}
