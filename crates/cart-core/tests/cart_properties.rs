use cart_core::prelude::*;
use cart_kv::{KvStore, MemoryStore};
use proptest::prelude::*;

fn size_strategy() -> impl Strategy<Value = LineSize> {
    prop_oneof![
        Just(LineSize::Default),
        "[0-9]{1,2}".prop_map(LineSize::Selected),
    ]
}

/// Prices with up to four decimals, so most are not whole cents.
fn price_strategy() -> impl Strategy<Value = Money> {
    (0_i64..10_000_000).prop_map(|units| Money::from_decimal(units as f64 / 10_000.0))
}

fn add_strategy() -> impl Strategy<Value = AddToCart> {
    (
        "[A-C][0-9]",
        price_strategy(),
        1_i64..20,
        size_strategy(),
    )
        .prop_map(|(product, price, quantity, size)| {
            AddToCart::sized(product, "Item", price, quantity, size)
        })
}

proptest! {
    #[test]
    fn merged_quantity_is_sum_of_adds(
        quantities in prop::collection::vec(1_i64..50, 1..20),
        size in size_strategy(),
    ) {
        let mut cart = Cart::new();
        for q in &quantities {
            cart.add_or_merge(AddToCart::sized("R1", "Gold Ring", Money::from_cents(2999), *q, size.clone()))
                .unwrap();
        }

        let id = LineId::derive(&ProductId::new("R1"), &size);
        let matching: Vec<_> = cart.lines().iter().filter(|l| l.id == id).collect();
        prop_assert_eq!(matching.len(), 1);
        prop_assert_eq!(matching[0].quantity, quantities.iter().sum::<i64>());
    }

    #[test]
    fn add_then_remove_restores_cart(
        existing in prop::collection::vec(add_strategy(), 0..10),
        extra in add_strategy(),
    ) {
        let mut cart = Cart::new();
        for item in existing {
            cart.add_or_merge(item).unwrap();
        }
        prop_assume!(cart.get(&extra.line_id()).is_none());

        let before = cart.clone();
        let id = cart.add_or_merge(extra).unwrap();
        cart.remove(&id);
        prop_assert_eq!(cart, before);
    }

    #[test]
    fn totals_match_line_sums(items in prop::collection::vec(add_strategy(), 0..15)) {
        let mut cart = Cart::new();
        for item in items {
            cart.add_or_merge(item).unwrap();
        }

        let quantity_sum: i64 = cart.lines().iter().map(|l| l.quantity).sum();
        let exact_sum = cart
            .lines()
            .iter()
            .fold(0.0, |acc, l| acc + l.price.to_decimal() * l.quantity as f64);

        prop_assert_eq!(cart.total_items(), quantity_sum);
        prop_assert_eq!(cart.subtotal().unwrap().to_decimal(), exact_sum);
        prop_assert_eq!(cart.grand_total().unwrap(), cart.subtotal().unwrap());
    }

    #[test]
    fn persisted_cart_reloads_unchanged(items in prop::collection::vec(add_strategy(), 0..10)) {
        let store = CartStore::new(MemoryStore::new());
        let mut expected = Cart::new();
        for item in items {
            expected.add_or_merge(item.clone()).unwrap();
            store.add(item).unwrap();
        }

        let loaded = store.load();
        prop_assert_eq!(&loaded, &expected);

        // Formatting for display never feeds back into stored values.
        let _ = loaded.subtotal().unwrap().display_amount();
        store.persist(&loaded).unwrap();
        prop_assert_eq!(store.load(), expected);
    }

    #[test]
    fn load_then_persist_keeps_stored_bytes(
        items in prop::collection::vec(add_strategy(), 1..10),
        absent in "[X-Z][0-9]",
    ) {
        let store = CartStore::new(MemoryStore::new());
        for item in items {
            store.add(item).unwrap();
        }
        let before = store.backend().get("jewelleryCart").unwrap();

        store.remove(&LineId::new(absent)).unwrap();
        prop_assert_eq!(store.backend().get("jewelleryCart").unwrap(), before);
    }
}

#[test]
fn clear_then_load_is_empty_and_key_absent() {
    let store = CartStore::new(MemoryStore::new());
    store
        .add(AddToCart::quick("R1", "Gold Ring", Money::from_decimal(29.99)))
        .unwrap();

    store.clear().unwrap();

    assert!(store.load().is_empty());
    assert_eq!(store.backend().get("jewelleryCart").unwrap(), None);
}

#[test]
fn quick_add_twice_scenario() {
    let store = CartStore::new(MemoryStore::new());
    for _ in 0..2 {
        store
            .add(AddToCart::quick("R1", "Gold Ring", Money::from_decimal(29.99)))
            .unwrap();
    }

    let cart = store.load();
    assert_eq!(cart.len(), 1);
    let line = cart.get(&LineId::new("R1-default")).unwrap();
    assert_eq!(line.quantity, 2);
    assert_eq!(cart.subtotal().unwrap(), Money::from_decimal(59.98));
}

#[test]
fn stored_prices_survive_reload_exactly() {
    let raw = r#"[{"id":"R1-default","name":"Gold Ring","price":29.99,"quantity":3,"size":"N/A (Quick Add)"}]"#;
    let store = CartStore::new(MemoryStore::with_entry("jewelleryCart", raw));

    let cart = store.load();
    store.persist(&cart).unwrap();

    assert_eq!(store.backend().get("jewelleryCart").unwrap().as_deref(), Some(raw));
}
