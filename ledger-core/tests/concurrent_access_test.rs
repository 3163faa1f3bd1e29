//! Concurrent access tests
//!
//! The context may be shared across threads. These tests check that account
//! number assignment and balance mutation stay consistent under contention.
//!
//! Run with: cargo test --test concurrent_access_test -- --nocapture

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ledger_core::config::Config;
use ledger_core::domain::WithdrawalLimits;
use ledger_core::ports::FixedClock;
use ledger_core::{Error, LedgerContext};

/// Number of concurrent threads for stress tests
const THREAD_COUNT: usize = 8;

/// Number of iterations per thread
const ITERATIONS_PER_THREAD: usize = 25;

fn create_shared_context(config: Config) -> Arc<LedgerContext> {
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let clock = Arc::new(FixedClock::new(today.and_hms_opt(12, 0, 0).unwrap()));
    let ctx = LedgerContext::with_clock(config, clock);

    let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    for t in 0..THREAD_COUNT {
        ctx.client_service
            .create_client(&format!("{}", 1000 + t), &format!("Client {}", t), dob, "")
            .unwrap();
    }
    Arc::new(ctx)
}

/// Test: many threads opening accounts at once get unique, contiguous numbers
#[test]
fn test_concurrent_account_creation_numbers_unique() {
    let ctx = create_shared_context(Config::default());
    let barrier = Arc::new(Barrier::new(THREAD_COUNT));

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|t| {
            let ctx = Arc::clone(&ctx);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let tax_id = format!("{}", 1000 + t);
                (0..ITERATIONS_PER_THREAD)
                    .map(|_| ctx.account_service.create_account(&tax_id).unwrap().number)
                    .collect::<Vec<u64>>()
            })
        })
        .collect();

    let mut numbers: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    numbers.sort_unstable();

    let expected: Vec<u64> = (1..=(THREAD_COUNT * ITERATIONS_PER_THREAD) as u64).collect();
    assert_eq!(numbers, expected);

    // Every client got exactly its own accounts
    for t in 0..THREAD_COUNT {
        let tax_id = format!("{}", 1000 + t);
        let accounts = ctx.account_service.client_accounts(&tax_id).unwrap();
        assert_eq!(accounts.len(), ITERATIONS_PER_THREAD);
        assert!(accounts.iter().all(|a| a.owner_tax_id == tax_id));
    }
}

/// Test: concurrent withdrawals from one account never overdraw it
#[test]
fn test_concurrent_withdrawals_never_overdraw() {
    // Unrestricted daily count so only the balance limits withdrawals
    let config = Config {
        withdrawal_limits: WithdrawalLimits::new(Decimal::new(500, 0), u32::MAX),
        ..Config::default()
    };
    let ctx = create_shared_context(config);
    let number = ctx.account_service.create_account("1000").unwrap().number;
    ctx.transaction_service
        .deposit("1000", number, Decimal::new(100, 0))
        .unwrap();

    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let success_count = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            let barrier = Arc::clone(&barrier);
            let success_count = Arc::clone(&success_count);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ITERATIONS_PER_THREAD {
                    if ctx
                        .transaction_service
                        .withdraw("1000", number, Decimal::new(3, 0))
                        .unwrap()
                    {
                        success_count.fetch_add(1, Ordering::SeqCst);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // 100 / 3 = 33 withdrawals fit, leaving 1
    let statement = ctx.transaction_service.statement("1000", number).unwrap();
    assert_eq!(success_count.load(Ordering::SeqCst), 33);
    assert_eq!(statement.balance, Decimal::ONE);
    assert_eq!(statement.transactions.len(), 34);
}

/// Test: the daily cap holds when several threads race for the last slots
#[test]
fn test_concurrent_withdrawals_respect_daily_cap() {
    let ctx = create_shared_context(Config::default());
    let number = ctx.account_service.create_account("1000").unwrap().number;
    ctx.transaction_service
        .deposit("1000", number, Decimal::new(1000, 0))
        .unwrap();

    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let capped = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            let barrier = Arc::clone(&barrier);
            let capped = Arc::clone(&capped);
            thread::spawn(move || {
                barrier.wait();
                match ctx.transaction_service.withdraw("1000", number, Decimal::TEN) {
                    Ok(ok) => assert!(ok),
                    Err(Error::DailyCapExceeded { .. }) => {
                        capped.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(e) => panic!("unexpected error: {}", e),
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(capped.load(Ordering::SeqCst), THREAD_COUNT - 3);
    let statement = ctx.transaction_service.statement("1000", number).unwrap();
    assert_eq!(statement.balance, Decimal::new(970, 0));
}
