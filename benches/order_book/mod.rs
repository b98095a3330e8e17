use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{Context, OrderBook, OrderId, Side};
use std::hint::black_box;

fn populated_book(orders: u64, levels: u32) -> OrderBook {
    let mut book = OrderBook::new(Context::new(), "BENCH");
    for i in 0..orders {
        let price = 10_000 + (i as u32 % levels) * 10;
        book.add_limit(OrderId::new(i + 1), Side::Sell, price, 10)
            .unwrap();
    }
    book
}

/// Register all benchmarks for the order book hot paths.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook");

    // Passive adds spread across price levels
    for &order_count in &[1_000u64, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("add_resting_orders", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || OrderBook::new(Context::new(), "BENCH"),
                    |mut book| {
                        for i in 0..count {
                            let price = 10_000 + (i as u32 % 500);
                            let _ = black_box(book.add_limit(
                                OrderId::new(i + 1),
                                if i % 2 == 0 { Side::Buy } else { Side::Sell },
                                if i % 2 == 0 { price } else { price + 1_000 },
                                10,
                            ));
                        }
                        book
                    },
                );
            },
        );
    }

    // Cancel every order from a deep single-price queue
    for &order_count in &[1_000u64, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("cancel_from_deep_queue", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || populated_book(count, 1),
                    |mut book| {
                        for i in 0..count {
                            let _ = black_box(book.cancel(OrderId::new(i + 1)));
                        }
                        book
                    },
                );
            },
        );
    }

    // One aggressive order sweeping the full opposite side
    for &level_count in &[100u64, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("aggressive_sweep", level_count),
            &level_count,
            |b, &count| {
                b.iter_with_setup(
                    || populated_book(count, count as u32),
                    |mut book| {
                        let _ = black_box(book.add_market(
                            OrderId::new(count + 1),
                            Side::Buy,
                            count as u32 * 10,
                        ));
                        book
                    },
                );
            },
        );
    }

    // Top-of-book queries against a populated book
    group.bench_function("best_bid_ask_query", |b| {
        let book = populated_book(10_000, 100);
        b.iter(|| {
            black_box(book.best_bid());
            black_box(book.best_ask());
            black_box(book.spread());
        });
    });

    group.finish();
}
