use chrono::NaiveDate;
use std::sync::Arc;
use tradecheck::application::bootstrap::ValidationApp;
use tradecheck::config::Config;
use tradecheck::domain::trade::{Direction, Trade};
use tradecheck::infrastructure::holidays::{NoHolidayService, StaticHolidayService};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// A trade that satisfies every default rule: spot settlement two days after
/// the default reference date (2016-09-10), known customer and entity.
fn valid_spot_trade() -> Trade {
    Trade {
        customer: Some("PLUTO1".to_string()),
        legal_entity: Some("CS Zurich".to_string()),
        ccy_pair: Some("EURUSD".to_string()),
        instrument: Some("Spot".to_string()),
        direction: Some(Direction::Buy),
        trade_date: Some(date("2016-09-10")),
        value_date: Some(date("2016-09-12")),
        trader: Some("Johann Baumfiddler".to_string()),
        ..Trade::default()
    }
}

fn app() -> ValidationApp {
    ValidationApp::build(&Config::default(), Arc::new(NoHolidayService))
}

#[tokio::test]
async fn test_valid_trade_produces_clean_report() {
    let engine = app().engine();
    let report = engine.validate(valid_spot_trade()).await.unwrap();
    assert!(!report.has_errors(), "unexpected errors: {:?}", report.field_errors());
}

#[tokio::test]
async fn test_violations_from_several_rules_are_merged_per_field() {
    let engine = app().engine();

    let trade = Trade {
        customer: Some("PLUTO9".to_string()),
        legal_entity: Some("CS London".to_string()),
        ccy_pair: Some("XXXUSD".to_string()),
        instrument: Some("Spot".to_string()),
        trade_date: Some(date("2016-09-14")),
        value_date: Some(date("2016-09-13")),
        ..Trade::default()
    };

    let report = engine.validate(trade).await.unwrap();
    assert!(report.has_errors());

    let errors = report.field_errors();
    assert_eq!(errors.get("customer").unwrap(), &vec!["Customer is invalid".to_string()]);
    assert_eq!(
        errors.get("legalEntity").unwrap(),
        &vec!["Legal entity is invalid".to_string()]
    );
    assert_eq!(
        errors.get("ccyPair").unwrap(),
        &vec!["Currency 1 is not valid".to_string()]
    );
    // Two distinct rules flagged the value date; registry order decides the
    // message order within the field.
    assert_eq!(
        errors.get("valueDate").unwrap(),
        &vec![
            "Spot trade valueDate should be 2 days after the reference date".to_string(),
            "valueDate before tradeDate".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_holiday_calendar_flags_value_date() {
    let holiday = date("2016-09-12");
    let mut holidays = StaticHolidayService::new();
    holidays.add_holiday("EUR".parse().unwrap(), holiday);

    let app = ValidationApp::build(&Config::default(), Arc::new(holidays));
    let report = app.engine().validate(valid_spot_trade()).await.unwrap();

    assert_eq!(
        report.field_errors().get("ccyPair").unwrap(),
        &vec!["valueDate matches to holiday for Currency 1".to_string()]
    );
}

#[tokio::test]
async fn test_multibyte_pair_still_yields_ccy_pair_finding() {
    let engine = app().engine();
    let trade = Trade {
        ccy_pair: Some("a€ab".to_string()),
        ..valid_spot_trade()
    };

    let report = engine.validate(trade).await.unwrap();
    assert_eq!(
        report.field_errors().get("ccyPair").unwrap(),
        &vec!["ccyPair length should be 6".to_string()]
    );
}

#[tokio::test]
async fn test_repeated_validation_is_idempotent() {
    let engine = app().engine();
    let trade = Trade {
        ccy_pair: Some("EURUS".to_string()),
        ..valid_spot_trade()
    };

    let first = engine.validate(trade.clone()).await.unwrap();
    let second = engine.validate(trade).await.unwrap();
    assert_eq!(first.field_errors(), second.field_errors());
}

#[tokio::test]
async fn test_bulk_matches_individual_validation() {
    let engine = app().engine();

    let trades = vec![
        valid_spot_trade(),
        Trade {
            customer: Some("PLUTO9".to_string()),
            ..valid_spot_trade()
        },
        Trade {
            ccy_pair: Some("".to_string()),
            ..valid_spot_trade()
        },
    ];

    let bulk = engine.validate_bulk(trades.clone()).await;
    assert_eq!(bulk.len(), trades.len());

    for (trade, outcome) in trades.into_iter().zip(bulk) {
        let individual = engine.validate(trade).await.unwrap();
        assert_eq!(outcome.unwrap().field_errors(), individual.field_errors());
    }
}

#[tokio::test]
async fn test_weekend_value_date_rejected_end_to_end() {
    let engine = app().engine();

    // 2016-09-17 is a Saturday; use a Forward so the spot convention check
    // stays quiet and only the weekend rule fires on this field.
    let trade = Trade {
        instrument: Some("Forward".to_string()),
        trade_date: Some(date("2016-09-10")),
        value_date: Some(date("2016-09-17")),
        ..valid_spot_trade()
    };

    let report = engine.validate(trade).await.unwrap();
    assert_eq!(
        report.field_errors().get("valueDate").unwrap(),
        &vec!["valueDate falls on a non-working day of week".to_string()]
    );
}
