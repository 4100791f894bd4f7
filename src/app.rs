//! Scan pipeline wiring
//!
//! A producer thread turns input lines into recognized frames and feeds
//! them over a bounded channel; the worker filters candidates through the
//! region of interest, extracts the best amount, converts it with the
//! active snapshot, and pushes the result into the calculator display.
//! Extraction is pure and stateless, so dropping frames at the throttle
//! or on shutdown is always safe.

use anyhow::Result;
use crossbeam_channel::bounded;
use parking_lot::RwLock;
use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::calculator::{format_number, Calculator, Operator};
use crate::capture::{FrameThrottle, RecognizedFrame};
use crate::extract::{self, ExtractedAmount};
use crate::rates::{catalog, RateService, RateSnapshot};
use crate::shared::{CurrencyPair, ScanResult, ScannerMessage, SharedAppState};
use crate::vision::{parse_candidate_line, segment_text};

/// Bounded frame channel; the producer blocks rather than ballooning
/// memory when the worker falls behind
const FRAME_CHANNEL_CAPACITY: usize = 8;

/// Turn one input line into a recognized frame.
///
/// Lines with tab-separated fields carry explicit confidence/geometry and
/// become a single candidate; plain lines are segmented like a raw
/// recognizer text block.
fn frame_from_line(line: &str) -> Result<RecognizedFrame> {
    let candidates = if line.contains('\t') {
        vec![parse_candidate_line(line)?]
    } else {
        segment_text(line)
    };
    Ok(RecognizedFrame::new(candidates))
}

/// Resolve an extracted amount against the configured pair and the
/// active snapshot. A recognized currency hint overrides the configured
/// source currency; the ambiguity of shared symbols is broken in favor
/// of the configured source.
pub fn resolve_scan(
    amount: ExtractedAmount,
    pair: &CurrencyPair,
    snapshot: &RateSnapshot,
) -> ScanResult {
    let detected_currency = amount
        .currency_hint
        .as_deref()
        .and_then(|hint| catalog::detect(hint, &pair.source));

    let source_code = detected_currency
        .map(|c| c.code.to_string())
        .unwrap_or_else(|| pair.source.clone());

    let converted = snapshot.convert(amount.value, &source_code, &pair.destination);

    ScanResult {
        amount,
        detected_currency,
        source_code,
        destination_code: pair.destination.clone(),
        converted,
    }
}

/// Print one resolved scan to stdout
fn report(result: &ScanResult, low_confidence_threshold: f32) {
    if result.amount.confidence < low_confidence_threshold {
        warn!(
            "Low recognition confidence ({:.2}) for {:?}",
            result.amount.confidence, result.amount.source_text
        );
    }

    match result.converted {
        Some(converted) => println!(
            "{} {} = {} {}  (from {:?}, confidence {:.2})",
            format_number(result.amount.value),
            result.source_code,
            format_number(converted),
            result.destination_code,
            result.amount.source_text,
            result.amount.confidence,
        ),
        None => println!(
            "{} {} = unavailable ({} or {} missing from rate table)",
            format_number(result.amount.value),
            result.source_code,
            result.source_code,
            result.destination_code,
        ),
    }
}

/// Run the scan pipeline until the input is exhausted
pub fn run_scanner(
    input: Box<dyn BufRead + Send>,
    shared: Arc<RwLock<SharedAppState>>,
    rates: Arc<RateService>,
) -> Result<()> {
    let (tx, rx) = bounded::<ScannerMessage>(FRAME_CHANNEL_CAPACITY);

    let interval_ms = {
        let state = shared.read();
        state.config.scan.process_interval_ms
    };

    let producer_shared = shared.clone();
    let producer = std::thread::spawn(move || {
        let mut throttle = (interval_ms > 0)
            .then(|| FrameThrottle::new(Duration::from_millis(interval_ms)));

        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    producer_shared.write().runtime.set_error(e.to_string());
                    warn!("Input error: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            producer_shared.write().runtime.frames_seen += 1;

            if let Some(ref mut throttle) = throttle {
                if !throttle.admit() {
                    debug!("Throttled frame: {:?}", line);
                    continue;
                }
            }

            let frame = match frame_from_line(&line) {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Skipping malformed input line {:?}: {}", line, e);
                    continue;
                }
            };

            if tx.send(ScannerMessage::Frame(frame)).is_err() {
                break;
            }
        }
        let _ = tx.send(ScannerMessage::Shutdown);
    });

    let mut calculator = Calculator::new();

    for message in rx {
        let frame = match message {
            ScannerMessage::Frame(frame) => frame,
            ScannerMessage::Shutdown => break,
        };

        let (pair, roi, threshold) = {
            let state = shared.read();
            (
                state.pair.clone(),
                state.config.scan.region_of_interest,
                state.config.scan.low_confidence_threshold,
            )
        };

        shared.write().runtime.frames_processed += 1;

        let candidates = roi.filter(frame.candidates);
        let Some(amount) = extract::extract(&candidates) else {
            debug!("No amount in frame");
            continue;
        };

        shared.write().runtime.amounts_extracted += 1;

        let result = resolve_scan(amount, &pair, &rates.current());
        report(&result, threshold);

        if let Some(converted) = result.converted {
            calculator.set_value(converted);
            shared.write().runtime.accumulator = Some(calculator.display().to_string());
        }
    }

    producer
        .join()
        .map_err(|_| anyhow::anyhow!("Frame producer thread panicked"))?;

    let runtime = shared.read().runtime.clone();
    info!(
        "Scan finished: {} frames seen, {} processed, {} amounts extracted",
        runtime.frames_seen, runtime.frames_processed, runtime.amounts_extracted
    );
    if let Some(ref accumulator) = runtime.accumulator {
        info!("Accumulator: {}", accumulator);
    }

    Ok(())
}

/// Interactive calculator over the scan accumulator.
///
/// Tokens per line: digits/numbers, `.`, `+ - * /`, `=`, `%`, `n` (sign
/// toggle), `c` (clear), `q` (quit).
pub fn run_calculator(input: impl BufRead) -> Result<()> {
    let mut calculator = Calculator::new();
    println!("{}", calculator.display());

    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if !apply_token(&mut calculator, token) {
                return Ok(());
            }
        }

        match calculator.pending() {
            Some((previous, op)) => {
                println!("{} {} {}", format_number(previous), op, calculator.display())
            }
            None if calculator.percent_mode() => println!("{}%", calculator.display()),
            None => println!("{}", calculator.display()),
        }
    }

    Ok(())
}

/// Apply one REPL token; returns false on quit
fn apply_token(calculator: &mut Calculator, token: &str) -> bool {
    match token {
        "+" => calculator.set_operator(Operator::Add),
        "-" => calculator.set_operator(Operator::Subtract),
        "*" | "x" | "×" => calculator.set_operator(Operator::Multiply),
        "/" | "÷" => calculator.set_operator(Operator::Divide),
        "=" => calculator.equals(),
        "%" => calculator.percent(),
        "n" => calculator.toggle_sign(),
        "c" => calculator.clear(),
        "q" => return false,
        number => {
            for ch in number.chars() {
                match ch {
                    '0'..='9' => calculator.press_digit(ch as u8 - b'0'),
                    '.' => calculator.press_decimal(),
                    _ => {
                        warn!("Ignoring unrecognized token {:?}", token);
                        break;
                    }
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::collections::HashMap;
    use std::io::Cursor;

    fn snapshot() -> RateSnapshot {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), 1.0);
        rates.insert("EUR".to_string(), 0.92);
        rates.insert("MXN".to_string(), 17.15);
        RateSnapshot::new("USD", rates)
    }

    fn pair() -> CurrencyPair {
        CurrencyPair::new("USD", "EUR").unwrap()
    }

    fn amount(text: &str) -> ExtractedAmount {
        extract::extract_from_text(text, 0.9).unwrap()
    }

    #[test]
    fn test_resolve_uses_configured_source_without_hint() {
        let result = resolve_scan(amount("1299"), &pair(), &snapshot());
        assert_eq!(result.source_code, "USD");
        assert!(result.detected_currency.is_none());
        let converted = result.converted.unwrap();
        assert!((converted - 1299.0 * 0.92).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_hint_overrides_source() {
        let result = resolve_scan(amount("€4,99"), &pair(), &snapshot());
        assert_eq!(result.source_code, "EUR");
        let converted = result.converted.unwrap();
        // EUR -> EUR through the base is the identity
        assert!((converted - 4.99).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_ambiguous_symbol_prefers_configured_source() {
        // "$" is shared by USD, CAD, MXN and others
        let mxn_pair = CurrencyPair::new("MXN", "EUR").unwrap();
        let result = resolve_scan(amount("$100"), &mxn_pair, &snapshot());
        assert_eq!(result.source_code, "MXN");
    }

    #[test]
    fn test_resolve_unconvertible_when_code_missing() {
        let result = resolve_scan(amount("£10"), &pair(), &snapshot());
        assert_eq!(result.source_code, "GBP");
        assert!(result.converted.is_none());
    }

    #[test]
    fn test_frame_from_plain_line_is_segmented() {
        let frame = frame_from_line("Total $4.99").unwrap();
        let texts: Vec<&str> = frame.candidates.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Total $4.99", "Total", "$4.99"]);
    }

    #[test]
    fn test_frame_from_tabbed_line_is_single_candidate() {
        let frame = frame_from_line("0.8\t$4.99").unwrap();
        assert_eq!(frame.candidates.len(), 1);
        assert!((frame.candidates[0].confidence - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scan_loop_end_to_end() {
        let mut config = AppConfig::default();
        config.scan.process_interval_ms = 0;
        let shared = Arc::new(RwLock::new(SharedAppState::new(config)));
        let rates = Arc::new(RateService::new(
            snapshot(),
            crate::rates::DEFAULT_ENDPOINT,
        ));

        let input = Cursor::new("€4,99\nno price here\n0.95\t0.5,0.5\t$10.00\n");
        run_scanner(Box::new(input), shared.clone(), rates).unwrap();

        let runtime = shared.read().runtime.clone();
        assert_eq!(runtime.frames_seen, 3);
        assert_eq!(runtime.frames_processed, 3);
        assert_eq!(runtime.amounts_extracted, 2);
        // Last conversion: $10.00 read as USD, converted to EUR
        assert_eq!(runtime.accumulator.as_deref(), Some("9.2"));
    }

    #[test]
    fn test_scan_loop_accumulator_tracks_converted_scans_only() {
        let mut config = AppConfig::default();
        config.scan.process_interval_ms = 0;
        let shared = Arc::new(RwLock::new(SharedAppState::new(config)));
        let rates = Arc::new(RateService::new(
            snapshot(),
            crate::rates::DEFAULT_ENDPOINT,
        ));

        // GBP is absent from the rate table, so the second scan extracts
        // but does not convert and must not disturb the accumulator
        let input = Cursor::new("€4,99\n£10\n");
        run_scanner(Box::new(input), shared.clone(), rates).unwrap();

        let runtime = shared.read().runtime.clone();
        assert_eq!(runtime.amounts_extracted, 2);
        assert_eq!(runtime.accumulator.as_deref(), Some("4.99"));
    }

    #[test]
    fn test_scan_loop_roi_drops_out_of_region_candidates() {
        let mut config = AppConfig::default();
        config.scan.process_interval_ms = 0;
        let shared = Arc::new(RwLock::new(SharedAppState::new(config)));
        let rates = Arc::new(RateService::new(
            snapshot(),
            crate::rates::DEFAULT_ENDPOINT,
        ));

        // Center (0.5, 0.05) is outside the default bracket region
        let input = Cursor::new("0.95\t0.5,0.05\t$10.00\n");
        run_scanner(Box::new(input), shared.clone(), rates).unwrap();

        assert_eq!(shared.read().runtime.amounts_extracted, 0);
    }

    #[test]
    fn test_calculator_token_stream() {
        let mut calc = Calculator::new();
        for token in ["1", "+", "2", "*", "3", "="] {
            assert!(apply_token(&mut calc, token));
        }
        assert_eq!(calc.display(), "9");
        assert!(!apply_token(&mut calc, "q"));
    }
}
