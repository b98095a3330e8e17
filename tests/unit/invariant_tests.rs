//! Property-based tests for order book invariants.
//!
//! Random operation sequences are replayed against a fresh book and the
//! structural invariants are checked through the public query surface.

use crate::helpers::Harness;
use matchbook_rs::{BookError, OrderFlags, OrderId, Side, TimeInForce};
use proptest::prelude::*;

const DEPTH_SCAN: usize = 1_000;

#[derive(Debug, Clone)]
enum Op {
    AddLimit { side: Side, price: u32, quantity: u32, tif: TimeInForce },
    AddMarket { side: Side, quantity: u32 },
    Cancel { slot: u64 },
    Modify { slot: u64, quantity: u32 },
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn tif_strategy() -> impl Strategy<Value = TimeInForce> {
    prop_oneof![
        Just(TimeInForce::Gtc),
        Just(TimeInForce::Gtc),
        Just(TimeInForce::Ioc),
        Just(TimeInForce::Fok),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (side_strategy(), 9_990u32..=10_010, 1u32..=50, tif_strategy()).prop_map(
            |(side, price, quantity, tif)| Op::AddLimit { side, price, quantity, tif }
        ),
        (side_strategy(), 1u32..=100).prop_map(|(side, quantity)| Op::AddMarket { side, quantity }),
        (0u64..200).prop_map(|slot| Op::Cancel { slot }),
        (0u64..200, 1u32..=80).prop_map(|(slot, quantity)| Op::Modify { slot, quantity }),
    ]
}

/// Replays `ops` against a fresh harness, assigning sequential ids.
fn replay(ops: &[Op]) -> Harness {
    let mut h = Harness::new();
    let mut next_id = 1u64;

    for op in ops {
        match *op {
            Op::AddLimit { side, price, quantity, tif } => {
                let _ = h.book.add_limit_with(
                    OrderId::new(next_id),
                    side,
                    price,
                    quantity,
                    tif,
                    OrderFlags::empty(),
                );
                next_id += 1;
            }
            Op::AddMarket { side, quantity } => {
                let _ = h.book.add_market(OrderId::new(next_id), side, quantity);
                next_id += 1;
            }
            Op::Cancel { slot } => {
                let id = slot % next_id.max(1);
                let _ = h.book.cancel(OrderId::new(id));
            }
            Op::Modify { slot, quantity } => {
                let id = slot % next_id.max(1);
                let _ = h.book.modify(OrderId::new(id), quantity);
            }
        }
    }
    h
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Top-of-book consistency: the cached best prices equal the best
    /// depth rows, and a populated book is never locked or crossed.
    #[test]
    fn top_of_book_consistent_and_never_crossed(
        ops in prop::collection::vec(op_strategy(), 1..120)
    ) {
        let h = replay(&ops);

        let bid_depth = h.book.depth(Side::Buy, DEPTH_SCAN);
        let ask_depth = h.book.depth(Side::Sell, DEPTH_SCAN);

        prop_assert_eq!(h.book.best_bid(), bid_depth.first().map(|level| level.price));
        prop_assert_eq!(h.book.best_ask(), ask_depth.first().map(|level| level.price));

        if let (Some(bid), Some(ask)) = (h.book.best_bid(), h.book.best_ask()) {
            prop_assert!(bid < ask, "crossed book: bid {} >= ask {}", bid, ask);
        }
    }

    /// Volume identity: the maintained side volumes equal the sums over
    /// the depth snapshot, and each level's quantity is non-zero.
    #[test]
    fn volume_identity_holds(
        ops in prop::collection::vec(op_strategy(), 1..120)
    ) {
        let h = replay(&ops);
        let stats = h.book.stats();

        let bid_depth = h.book.depth(Side::Buy, DEPTH_SCAN);
        let ask_depth = h.book.depth(Side::Sell, DEPTH_SCAN);

        let bid_sum: u64 = bid_depth.iter().map(|level| level.quantity).sum();
        let ask_sum: u64 = ask_depth.iter().map(|level| level.quantity).sum();

        prop_assert_eq!(stats.bid_volume, bid_sum);
        prop_assert_eq!(stats.ask_volume, ask_sum);
        prop_assert_eq!(stats.bid_levels, bid_depth.len());
        prop_assert_eq!(stats.ask_levels, ask_depth.len());

        for level in bid_depth.iter().chain(ask_depth.iter()) {
            prop_assert!(level.quantity > 0, "empty level in book at {}", level.price);
            prop_assert!(level.order_count > 0);
        }

        let level_orders: u64 = bid_depth
            .iter()
            .chain(ask_depth.iter())
            .map(|level| u64::from(level.order_count))
            .sum();
        prop_assert_eq!(stats.total_orders as u64, level_orders);
    }

    /// Depth snapshots are sorted best-first on both sides.
    #[test]
    fn depth_sorted_correctly(
        ops in prop::collection::vec(op_strategy(), 1..120)
    ) {
        let h = replay(&ops);

        for window in h.book.depth(Side::Buy, DEPTH_SCAN).windows(2) {
            prop_assert!(window[0].price > window[1].price, "bids not descending");
        }
        for window in h.book.depth(Side::Sell, DEPTH_SCAN).windows(2) {
            prop_assert!(window[0].price < window[1].price, "asks not ascending");
        }
    }

    /// Conservation: every trade has a positive quantity, distinct
    /// counterparties, and total traded volume never exceeds what was
    /// submitted.
    #[test]
    fn trades_are_well_formed(
        ops in prop::collection::vec(op_strategy(), 1..120)
    ) {
        let h = replay(&ops);

        let submitted: u64 = ops
            .iter()
            .map(|op| match op {
                Op::AddLimit { quantity, .. } | Op::AddMarket { quantity, .. } => {
                    u64::from(*quantity)
                }
                _ => 0,
            })
            .sum();

        let mut traded = 0u64;
        for trade in h.trades.borrow().iter() {
            prop_assert!(trade.quantity > 0, "zero-quantity trade");
            prop_assert!(trade.price > 0, "zero-price trade");
            prop_assert_ne!(trade.aggressive_order_id, trade.passive_order_id);
            traded += u64::from(trade.quantity);
        }
        prop_assert!(traded <= submitted);
    }

    /// Sweep monotonicity: within one aggressive call the sequence of
    /// execution prices moves away from the aggressor's own side.
    #[test]
    fn sweep_prices_monotone(
        quantities in prop::collection::vec(1u32..=30, 1..10),
        taker_quantity in 1u32..=400,
    ) {
        let mut h = Harness::new();

        for (i, &quantity) in quantities.iter().enumerate() {
            h.book
                .add_limit(
                    OrderId::new(i as u64 + 1),
                    Side::Sell,
                    10_000 + i as u32 * 10,
                    quantity,
                )
                .unwrap();
        }
        h.clear_logs();

        h.book
            .add_limit(OrderId::new(1_000), Side::Buy, 20_000, taker_quantity)
            .unwrap();

        for window in h.trades.borrow().windows(2) {
            prop_assert!(
                window[0].price <= window[1].price,
                "buy sweep prices not non-decreasing"
            );
        }
    }

    /// Index consistency: after any sequence, `has_order` agrees with
    /// `order_info`, and cancel of an indexed id always succeeds exactly
    /// once.
    #[test]
    fn index_consistency(
        ops in prop::collection::vec(op_strategy(), 1..120)
    ) {
        let mut h = replay(&ops);

        for id in 1..=250u64 {
            let id = OrderId::new(id);
            prop_assert_eq!(h.book.has_order(id), h.book.order_info(id).is_ok());
        }

        // Draining the index leaves a structurally empty book.
        for id in 1..=250u64 {
            let id = OrderId::new(id);
            if h.book.has_order(id) {
                prop_assert!(h.book.cancel(id).is_ok());
                prop_assert_eq!(h.book.cancel(id), Err(BookError::OrderNotFound(id)));
            }
        }
        let stats = h.book.stats();
        prop_assert_eq!(stats.total_orders, 0);
        prop_assert_eq!(stats.bid_levels, 0);
        prop_assert_eq!(stats.ask_levels, 0);
        prop_assert_eq!(stats.bid_volume, 0);
        prop_assert_eq!(stats.ask_volume, 0);
    }

    /// FOK is all-or-nothing and IOC never rests.
    #[test]
    fn immediate_policies_never_rest_partially(
        resting in prop::collection::vec((9_995u32..=10_005, 1u32..=40), 0..10),
        side in side_strategy(),
        price in 9_990u32..=10_010,
        quantity in 1u32..=200,
        fok in proptest::bool::ANY,
    ) {
        let mut h = Harness::new();
        for (i, &(level_price, level_quantity)) in resting.iter().enumerate() {
            let _ = h.book.add_limit(
                OrderId::new(i as u64 + 1),
                side.opposite(),
                level_price,
                level_quantity,
            );
        }
        h.clear_logs();

        let tif = if fok { TimeInForce::Fok } else { TimeInForce::Ioc };
        let taker = OrderId::new(9_999);
        let result = h.book.add_limit_with(taker, side, price, quantity, tif, OrderFlags::empty());

        prop_assert!(!h.book.has_order(taker), "immediate order rested");

        let traded: u64 = h.trades.borrow().iter().map(|t| u64::from(t.quantity)).sum();
        if fok {
            match result {
                Ok(()) => prop_assert_eq!(traded, u64::from(quantity)),
                Err(BookError::CannotFill(_)) => prop_assert_eq!(traded, 0),
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }

    /// Deterministic replay: the same operation sequence produces the
    /// same trade tape, including trade prices and quantities.
    #[test]
    fn deterministic_replay(
        ops in prop::collection::vec(op_strategy(), 1..80)
    ) {
        let first = replay(&ops);
        let second = replay(&ops);

        let tape_a: Vec<(u64, u64, u32, u32)> = first
            .trades
            .borrow()
            .iter()
            .map(|t| (
                t.aggressive_order_id.value(),
                t.passive_order_id.value(),
                t.price,
                t.quantity,
            ))
            .collect();
        let tape_b: Vec<(u64, u64, u32, u32)> = second
            .trades
            .borrow()
            .iter()
            .map(|t| (
                t.aggressive_order_id.value(),
                t.passive_order_id.value(),
                t.price,
                t.quantity,
            ))
            .collect();

        prop_assert_eq!(tape_a, tape_b);
        prop_assert_eq!(first.book.best_bid(), second.book.best_bid());
        prop_assert_eq!(first.book.best_ask(), second.book.best_ask());
    }

    /// Clear is total after any sequence.
    #[test]
    fn clear_is_total(
        ops in prop::collection::vec(op_strategy(), 1..80)
    ) {
        let mut h = replay(&ops);
        h.book.clear();

        let stats = h.book.stats();
        prop_assert_eq!(stats.total_orders, 0);
        prop_assert_eq!(stats.bid_levels, 0);
        prop_assert_eq!(stats.ask_levels, 0);
        prop_assert_eq!(h.book.best_bid(), None);
        prop_assert_eq!(h.book.best_ask(), None);
    }
}

#[test]
fn regression_empty_book_depth() {
    let h = Harness::new();
    assert!(h.book.depth(Side::Buy, 10).is_empty());
    assert!(h.book.depth(Side::Sell, 10).is_empty());
}

#[test]
fn regression_modify_after_full_fill_reports_not_found() {
    let mut h = Harness::new();
    h.book.add_limit(OrderId::new(1), Side::Sell, 10_000, 50).unwrap();
    h.book.add_limit(OrderId::new(2), Side::Buy, 10_000, 50).unwrap();

    assert_eq!(
        h.book.modify(OrderId::new(1), 80),
        Err(BookError::OrderNotFound(OrderId::new(1)))
    );
}
