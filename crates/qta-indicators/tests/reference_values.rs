//! Reference scenario tests for qta-indicators.
//!
//! Each scenario runs a small series whose intermediates were worked out
//! by hand, and checks every step of the pipeline, not only the headline
//! column.

use approx::assert_relative_eq;
use qta_core::{DataFrame, PriceInput, Series};

use qta_indicators::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn ohlcv_fixture() -> DataFrame<f64> {
    let mut df = DataFrame::new();
    df.add_column(
        "High",
        Series::from_vec(vec![10.0, 12.0, 13.0, 12.0, 14.0, 15.0, 14.0, 16.0, 17.0, 16.0]),
    )
    .unwrap();
    df.add_column(
        "Low",
        Series::from_vec(vec![8.0, 9.0, 10.0, 9.0, 11.0, 12.0, 11.0, 13.0, 14.0, 13.0]),
    )
    .unwrap();
    df.add_column(
        "Close",
        Series::from_vec(vec![9.0, 11.0, 12.0, 10.0, 13.0, 14.0, 12.0, 15.0, 16.0, 14.0]),
    )
    .unwrap();
    df.add_column(
        "Volume",
        Series::from_vec(vec![
            100.0, 200.0, 150.0, 300.0, 250.0, 180.0, 220.0, 160.0, 190.0, 210.0,
        ]),
    )
    .unwrap();
    df
}

fn assert_series_eq(actual: &Series<f64>, expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "position {i}: expected NaN, got {a}");
        } else {
            assert_relative_eq!(a, e, max_relative = 1e-9);
        }
    }
}

const NAN: f64 = f64::NAN;

// ============================================================================
// ADX Scenario
// ============================================================================

#[test]
fn adx_full_pipeline() {
    let out = adx(&ohlcv_fixture(), 3, true).unwrap();

    assert_series_eq(
        out.column("tr").unwrap(),
        &[2.0, 3.0, 3.0, 3.0, 4.0, 3.0, 3.0, 4.0, 3.0, 3.0],
    );
    assert_series_eq(
        out.column("dm_pos").unwrap(),
        &[NAN, 2.0, 1.0, 0.0, 2.0, 1.0, 0.0, 2.0, 1.0, 0.0],
    );
    assert_series_eq(
        out.column("dm_neg").unwrap(),
        &[NAN, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
    );

    let roll_tr = out.column("roll_tr").unwrap();
    assert!(roll_tr[2].is_nan());
    assert_relative_eq!(roll_tr[3], 9.0);
    assert_relative_eq!(roll_tr[4], 10.0);
    assert_relative_eq!(roll_tr[5], 10.0 - 10.0 / 3.0 + 3.0);

    let dx = out.column("dx").unwrap();
    assert_relative_eq!(dx[3], 50.0, max_relative = 1e-12);
    assert_relative_eq!(dx[4], 500.0 / 7.0, max_relative = 1e-12);
    assert_relative_eq!(dx[5], 1000.0 / 23.0, max_relative = 1e-12);

    let adx_col = out.column("adx").unwrap();
    assert!(adx_col[4].is_nan());
    assert_relative_eq!(adx_col[5], 8850.0 / 161.0, max_relative = 1e-9);
}

#[test]
fn adx_and_atr_agree_on_true_range() {
    let df = ohlcv_fixture();
    let from_adx = adx(&df, 3, true).unwrap();
    let from_atr = atr(&df, 3, true).unwrap();

    let a = from_adx.column("tr").unwrap();
    let b = from_atr.column("tr").unwrap();
    for i in 0..df.len() {
        assert_relative_eq!(a[i], b[i]);
    }
}

// ============================================================================
// ATR Scenario
// ============================================================================

#[test]
fn atr_full_pipeline() {
    let out = atr(&ohlcv_fixture(), 3, true).unwrap();

    let hc = out.column("dff_hc").unwrap();
    assert!(hc[0].is_nan());
    assert_relative_eq!(hc[1], 3.0);

    assert_series_eq(
        out.column("atr").unwrap(),
        &[
            NAN,
            NAN,
            8.0 / 3.0,
            3.0,
            10.0 / 3.0,
            10.0 / 3.0,
            10.0 / 3.0,
            10.0 / 3.0,
            10.0 / 3.0,
            10.0 / 3.0,
        ],
    );
}

// ============================================================================
// RSI Scenario
// ============================================================================

#[test]
fn rsi_full_pipeline() {
    let out = rsi(&vec![1.0, 2.0, 3.0, 2.0, 3.0].into(), 2, true).unwrap();

    assert_series_eq(out.column("gain").unwrap(), &[NAN, 1.0, 1.0, 0.0, 1.0]);
    assert_series_eq(out.column("loss").unwrap(), &[NAN, 0.0, 0.0, 1.0, 0.0]);
    assert_series_eq(out.column("av_gain").unwrap(), &[NAN, NAN, 1.0, 0.5, 0.75]);
    assert_series_eq(out.column("av_loss").unwrap(), &[NAN, NAN, 0.0, 0.5, 0.25]);
    assert_series_eq(out.column("rsi").unwrap(), &[NAN, NAN, 100.0, 50.0, 75.0]);
}

// ============================================================================
// Bollinger Scenario
// ============================================================================

#[test]
fn bollband_full_pipeline() {
    let out = bollband(&vec![1.0, 2.0, 3.0, 4.0].into(), 2, true).unwrap();

    assert_series_eq(out.column("ma").unwrap(), &[NAN, 1.5, 2.5, 3.5]);

    let half_width = 2.0 * 0.5_f64.sqrt();
    assert_series_eq(
        out.column("bollband_up").unwrap(),
        &[NAN, NAN, 2.5 + half_width, 3.5 + half_width],
    );
    assert_series_eq(
        out.column("bollband_low").unwrap(),
        &[NAN, NAN, 2.5 - half_width, 3.5 - half_width],
    );
}

// ============================================================================
// MACD Scenario
// ============================================================================

#[test]
fn macd_full_pipeline() {
    let input: PriceInput<f64> = vec![1.0, 2.0, 3.0].into();
    let out = macd(&input, 3, 1, 2, true).unwrap();

    assert_series_eq(out.column("slow_ma").unwrap(), &[1.0, 5.0 / 3.0, 17.0 / 7.0]);
    assert_series_eq(out.column("fast_ma").unwrap(), &[1.0, 2.0, 3.0]);
    assert_series_eq(
        out.column("macd_line").unwrap(),
        &[0.0, 1.0 / 3.0, 3.0 - 17.0 / 7.0],
    );

    // signal is the adjusted EWM (span 2, alpha 2/3) of the line:
    // [0, (1/3)/(4/3 * 1/4 + 1) ... ] worked out below
    let line = [0.0, 1.0 / 3.0, 3.0 - 17.0 / 7.0];
    let alpha = 2.0 / 3.0;
    let mut num = 0.0;
    let mut den = 0.0;
    let mut expected = Vec::new();
    for &x in &line {
        num = num * (1.0 - alpha) + x;
        den = den * (1.0 - alpha) + 1.0;
        expected.push(num / den);
    }
    assert_series_eq(out.column("macd_signal").unwrap(), &expected);
}

// ============================================================================
// OBV Scenario
// ============================================================================

#[test]
fn obv_full_pipeline() {
    let out = obv(&ohlcv_fixture(), true).unwrap();

    assert_series_eq(
        out.column("directional").unwrap(),
        &[0.0, 1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
    );
    assert_series_eq(
        out.column("obv").unwrap(),
        &[0.0, 200.0, 350.0, 50.0, 300.0, 480.0, 260.0, 420.0, 610.0, 400.0],
    );
}
