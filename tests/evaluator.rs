use std::cmp::Ordering;

use poker_equity::{
    compare, evaluate, parse_cards, Card, Deck, HandCategory, HandValue, Rank::*,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn eval(s: &str) -> HandValue {
    evaluate(&parse_cards(s).unwrap()).unwrap()
}

#[test]
fn example_hands() {
    // 3d..7d is the best run; the wheel is also present but lower.
    assert_eq!(eval("Ad 2d 3d 4d 5d 6d 7d"), HandValue::StraightFlush { top: Seven });
    assert_eq!(eval("Ad 2d 3d 4d 5d Kc Qh"), HandValue::StraightFlush { top: Five });
    assert_eq!(eval("Ad Kd Qd Jd Td 6d 7d"), HandValue::StraightFlush { top: Ace });
    assert_eq!(eval("Ad 2d 3d 7c 7h 7s 7d"), HandValue::Quads { quads: Seven, kicker: Ace });
    assert_eq!(eval("Ad Ah 3d 3c 7h 7s 7d"), HandValue::FullHouse { set: Seven, pair: Ace });
    assert_eq!(eval("Ac 6c 3d 3c 7c 8c 4c"), HandValue::Flush([Ace, Eight, Seven, Six, Four]));
    assert_eq!(eval("Ac 2d 3d 4h 5s 8c 4c"), HandValue::Straight { top: Five });
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = eval("Ac 2d 3d 4h 5s");
    let six_high = eval("2c 3d 4h 5s 6d");
    assert!(wheel < six_high);

    let wheel_sf = eval("Ah 2h 3h 4h 5h");
    let six_high_sf = eval("2s 3s 4s 5s 6s");
    assert!(wheel_sf < six_high_sf);
    assert!(wheel_sf > eval("Ac Ad Ah As Kc"));
}

#[test]
fn order_independent() {
    let mut rng = StdRng::seed_from_u64(2024);
    for size in 5..=7 {
        for _ in 0..500 {
            let mut deck = Deck::shuffled(&mut rng);
            let mut cards = deck.deal_many(&mut rng, size).unwrap();
            let first = evaluate(&cards).unwrap();
            cards.shuffle(&mut rng);
            assert_eq!(evaluate(&cards).unwrap(), first, "{cards:?}");
        }
    }
}

#[test]
fn score_order_matches_compare() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut values = Vec::new();
    for _ in 0..400 {
        let mut deck = Deck::new();
        let cards = deck.deal_many(&mut rng, 7).unwrap();
        values.push(evaluate(&cards).unwrap());
    }

    for a in &values {
        for b in &values {
            assert_eq!(compare(a, b), a.score().cmp(&b.score()), "{a} vs {b}");
            if compare(a, b) == Ordering::Equal {
                assert_eq!(a, b);
            }
        }
    }
}

#[test]
fn category_order_holds_on_real_hands() {
    let ladder = [
        "2c 4d 6h 8s Tc Qd Ah",
        "2c 2d 6h 8s Tc Qd Ah",
        "2c 2d 6h 6s Tc Qd Ah",
        "2c 2d 2h 8s Tc Qd Ah",
        "2c 3d 4h 5s 6c Qd Kh",
        "2c 4c 6c 8c Tc Qd Ah",
        "2c 2d 2h 8s 8c Qd Ah",
        "2c 2d 2h 2s Tc Qd Ah",
        "2c 3c 4c 5c 6c Qd Ah",
    ];
    let values: Vec<HandValue> = ladder.iter().map(|s| eval(s)).collect();
    for (v, cat) in values.iter().zip(HandCategory::ALL) {
        assert_eq!(v.category(), cat, "{v}");
    }
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn every_card_evaluates() {
    // Sliding windows of seven over the deck touch every id.
    let deck: Vec<Card> = Card::all().collect();
    for w in deck.windows(7) {
        evaluate(w).unwrap();
    }
}
