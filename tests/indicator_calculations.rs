use traderules::config::FeatureConfig;
use traderules::data::PriceSeries;
use traderules::functions::indicators::{EMA, MOM, SMA, TBR, VOL};
use traderules::functions::{evaluate, VectorizedIndicator};
use traderules::ml::FeatureEngineer;
use traderules::Indicator;
use polars::prelude::IntoLazy;

/// 1.0, 2.0, ..., n
fn rising(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

/// 100.0, 99.0, ... for n days
fn falling(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 - i as f64).collect()
}

fn small_config() -> FeatureConfig {
    FeatureConfig {
        short_window: 3,
        long_window: 5,
        horizon: 2,
        volatility_threshold: 0.03,
    }
}

#[test]
fn test_indicator_values_on_rising_series() {
    let prices = rising(40);

    // window 8, 9, 10
    assert_eq!(evaluate(&SMA::new(3), &prices).unwrap()[10], Some(9.0));
    // seed 6.0 from days 4..7, then smoothed over 9 and 10 with k = 0.5
    assert_eq!(evaluate(&EMA::new(3), &prices).unwrap()[10], Some(8.75));
    assert_eq!(evaluate(&EMA::new(5), &prices).unwrap()[10], Some(7.8));
    // (11 - 10) / 10
    assert_eq!(evaluate(&TBR::new(3), &prices).unwrap()[10], Some(0.1));
    // std 1.0 over mean 9.0
    assert_eq!(evaluate(&VOL::new(3), &prices).unwrap()[10], Some(0.11));
    assert_eq!(evaluate(&MOM::new(3), &prices).unwrap()[10], Some(3.0));
}

#[test]
fn test_lookback_boundaries() {
    let prices = rising(12);

    let indicators: [&dyn VectorizedIndicator; 5] =
        [&SMA::new(4), &EMA::new(4), &TBR::new(4), &VOL::new(4), &MOM::new(4)];
    for indicator in indicators {
        let t = indicator.lookback();
        let values = evaluate(indicator, &prices).unwrap();
        assert_eq!(values.len(), prices.len());
        assert!(values[t].is_some(), "{} at {}", indicator.alias(), t);
        assert!(values[t - 1].is_none(), "{} at {}", indicator.alias(), t - 1);
        assert!(values[t..].iter().all(Option::is_some), "{} has gaps", indicator.alias());
    }
}

#[test]
fn test_rising_series_flags() {
    let prices = rising(40);
    let labels = vec![true; 40];
    let features = FeatureEngineer::new(small_config())
        .extract(&PriceSeries::new(prices, labels).unwrap())
        .unwrap();

    // days 10 ..= 37
    assert_eq!(features.len(), 28);
    for vector in &features {
        assert_eq!(vector.flags, vec![true, true, true, false, false, true]);
        assert!(vector.label);
    }
}

#[test]
fn test_falling_series_flags() {
    let prices = falling(40);
    let labels = vec![false; 40];
    let features = FeatureEngineer::new(small_config())
        .extract(&PriceSeries::new(prices, labels).unwrap())
        .unwrap();

    assert_eq!(features.len(), 28);
    for vector in &features {
        assert_eq!(vector.flags, vec![false, false, false, true, true, false]);
        assert!(!vector.label);
    }
}

#[test]
fn test_labels_follow_their_day() {
    let prices = rising(20);
    let labels: Vec<bool> = (0..20).map(|i| i % 3 == 0).collect();
    let features = FeatureEngineer::new(small_config())
        .extract(&PriceSeries::new(prices, labels.clone()).unwrap())
        .unwrap();

    let expected: Vec<bool> = labels[10..18].to_vec();
    let actual: Vec<bool> = features.iter().map(|v| v.label).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_flag_columns_follow_indicator_order() {
    let engineer = FeatureEngineer::new(small_config());
    let series = PriceSeries::new(rising(20), vec![true; 20]).unwrap();

    let names: Vec<String> = series
        .frame()
        .clone()
        .lazy()
        .select(engineer.flag_expressions())
        .collect()
        .unwrap()
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let expected: Vec<String> = Indicator::all().iter().map(|i| i.column().to_string()).collect();
    assert_eq!(names, expected);
}
