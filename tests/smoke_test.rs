//! Smoke test against the live HearthstoneJSON API.
//!
//! Downloads the real collectible catalog into a temp directory and builds a
//! report for a known deck. Decoding uses the program in `HSDECK_DECODER`
//! (plus any whitespace-separated args in `HSDECK_DECODER_ARGS`); without it
//! the decoder checks are skipped.
//!
//! Run with:
//! ```sh
//! cargo test -- --ignored --nocapture
//! ```

use hsdeck_info::{CommandDecoder, DeckInfo};

const DECK_CODE: &str = "AAECAR8GxwPJBLsFmQfZB/oIDI0BqAK1A+sEkgXtBg==";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Print a section header to stderr.
fn section(name: &str) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("  {}", name);
    eprintln!("{}", "=".repeat(60));
}

/// Counters for pass/fail/skip reporting.
struct Counters {
    pass: usize,
    fail: usize,
    skip: usize,
}

impl Counters {
    fn new() -> Self {
        Self {
            pass: 0,
            fail: 0,
            skip: 0,
        }
    }

    fn check(&mut self, label: &str, condition: bool, detail: &str) {
        let status = if condition { "PASS" } else { "FAIL" };
        if condition {
            self.pass += 1;
        } else {
            self.fail += 1;
        }
        if detail.is_empty() {
            eprintln!("  [{}] {}", status, label);
        } else {
            eprintln!("  [{}] {} -- {}", status, label, detail);
        }
    }

    fn skip(&mut self, label: &str, reason: &str) {
        self.skip += 1;
        eprintln!("  [SKIP] {} -- {}", label, reason);
    }
}

// ---------------------------------------------------------------------------
// Main smoke test
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn smoke_test() {
    let tmp = tempfile::tempdir().unwrap();
    let info = DeckInfo::builder().cache_dir(tmp.path()).build().unwrap();
    let mut c = Counters::new();

    section("Catalog");

    let count = info.catalog().map(|cat| cat.len());
    c.check(
        "catalog downloads",
        matches!(count, Ok(n) if n > 1000),
        &format!("{:?}", count.as_ref().map_err(|e| e.to_string())),
    );
    c.check(
        "catalog cached on disk",
        info.cache().catalog_path("enUS").exists(),
        "",
    );
    let version = std::fs::read_to_string(tmp.path().join("version.txt")).unwrap_or_default();
    c.check(
        "build number saved",
        !version.trim().is_empty(),
        &format!("build={}", version.trim()),
    );

    let refreshed = info.refresh();
    c.check(
        "refresh() after fresh download",
        matches!(refreshed, Ok(false)),
        &format!("{:?}", refreshed.map_err(|e| e.to_string())),
    );

    section("Offline reuse");

    let offline = DeckInfo::builder()
        .cache_dir(tmp.path())
        .offline(true)
        .build()
        .unwrap();
    let offline_count = offline.catalog().map(|cat| cat.len()).ok();
    c.check(
        "offline client reads cached catalog",
        offline_count.is_some() && offline_count == count.as_ref().ok().copied(),
        "",
    );

    section("Report");

    match std::env::var("HSDECK_DECODER") {
        Ok(program) => {
            let args: Vec<String> = std::env::var("HSDECK_DECODER_ARGS")
                .unwrap_or_default()
                .split_whitespace()
                .map(str::to_string)
                .collect();
            let decoder = CommandDecoder::new(program).args(args);
            match info.report(DECK_CODE, &decoder) {
                Ok(report) => {
                    c.check(
                        "report has 30 cards",
                        report.stats.total_cards == 30,
                        &format!("cards={}", report.stats.total_cards),
                    );
                    c.check(
                        "no unknown cards",
                        report.cards.iter().all(|card| card.name != "Unknown Card"),
                        "",
                    );
                    c.check("class resolved", report.class == "Hunter", &report.class);
                    c.check(
                        "analysis written",
                        report.analysis.text.starts_with("This appears to be a "),
                        report.analysis.archetype.as_str(),
                    );
                    eprintln!("\n{}", report);
                }
                Err(e) => c.check("report builds", false, &e.to_string()),
            }
        }
        Err(_) => c.skip("report", "HSDECK_DECODER not set"),
    }

    section("Display");

    let display = info.to_string();
    c.check("Display impl", display.contains("DeckInfo("), &display);

    // ================================================================
    // SUMMARY
    // ================================================================
    section("SMOKE TEST COMPLETE");

    let total_checks = c.pass + c.fail;
    eprintln!("  Total:   {} checks ({} skipped)", total_checks, c.skip);
    eprintln!("  Passed:  {}", c.pass);
    eprintln!("  Failed:  {}", c.fail);
    eprintln!();

    assert_eq!(c.fail, 0, "{} smoke test checks failed", c.fail);
}
