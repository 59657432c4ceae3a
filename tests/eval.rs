//! Hand evaluator integration tests.

use std::cmp::Ordering;

use drawrs::{
    Card, Category, EvalError, HAND_SIZE, Rank, Suit, best_five, compare, evaluate,
    evaluate_winner,
};

fn cards(list: &str) -> Vec<Card> {
    list.split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect()
}

fn ranks(five: &[Card]) -> Vec<Rank> {
    five.iter().map(|card| card.rank).collect()
}

fn category(list: &str) -> Category {
    evaluate(&cards(list)).unwrap().category
}

#[test]
fn card_text_round_trips() {
    assert_eq!("Ah".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
    assert_eq!("10c".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
    assert_eq!("td".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
    assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "Tc");
    assert_eq!(Card::new(Rank::Seven, Suit::Spades).to_string(), "7s");

    assert_eq!("1h".parse::<Card>(), Err(drawrs::ParseCardError::Rank));
    assert_eq!("Ax".parse::<Card>(), Err(drawrs::ParseCardError::Suit));
    assert_eq!("A".parse::<Card>(), Err(drawrs::ParseCardError::Length));
    assert_eq!("Ahh".parse::<Card>(), Err(drawrs::ParseCardError::Length));
}

#[test]
fn category_names_and_values() {
    assert_eq!(Category::ThreeOfAKind.name(), "Three of a Kind");
    assert_eq!(Category::OnePair.to_string(), "One Pair");
    assert_eq!(Category::HighCard.value(), 1);
    assert_eq!(Category::RoyalFlush.value(), 10);
    assert!(Category::STRONGEST_FIRST.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn five_card_categories() {
    let table = [
        ("Th Jh Qh Kh Ah", Category::RoyalFlush),
        ("9h Th Jh Qh Kh", Category::StraightFlush),
        ("Ah 2h 3h 4h 5h", Category::StraightFlush),
        ("9c 9d 9h 9s 2c", Category::FourOfAKind),
        ("Kc Kd Kh 2s 2c", Category::FullHouse),
        ("2h 7h 9h Jh Kh", Category::Flush),
        ("5c 6d 7h 8s 9c", Category::Straight),
        ("Ac 2d 3h 4s 5c", Category::Straight),
        ("Tc Jd Qh Ks Ac", Category::Straight),
        ("Qc Qd Qh 4s 2c", Category::ThreeOfAKind),
        ("Jc Jd 4h 4s 2c", Category::TwoPair),
        ("Ac As Kd Qc Jh", Category::OnePair),
        ("2c 5d 9h Js Kc", Category::HighCard),
    ];

    for (hand, expected) in table {
        assert_eq!(category(hand), expected, "{hand}");
    }
}

#[test]
fn ace_only_plays_low_in_the_wheel() {
    assert_eq!(category("Kc Ac 2d 3h 4s"), Category::HighCard);
    assert_eq!(category("Qc Kc Ac 2d 3h"), Category::HighCard);

    let wheel = cards("Ah 2c 3d 4s 5h");
    let six_high = cards("2h 3c 4d 5s 6h");
    let broadway = cards("Ts Jc Qd Ks Ah");

    assert!(evaluate(&wheel).unwrap() < evaluate(&six_high).unwrap());
    assert_eq!(
        compare(&wheel, &six_high, Category::Straight),
        Ok(Ordering::Less)
    );
    assert_eq!(
        compare(&broadway, &wheel, Category::Straight),
        Ok(Ordering::Greater)
    );
}

#[test]
fn seven_card_categories() {
    let table = [
        ("Ah Ad As Kc Kd Ks 2h", Category::FullHouse),
        ("2h 3h 4h 5h 6h 7h 8h", Category::StraightFlush),
        ("Ah Kh Qh Jh Th 9h 8h", Category::RoyalFlush),
        ("2h 5h 9h Jh Kh Kc Kd", Category::Flush),
        ("Kh Kc 2h 2s 7h 9h Jh", Category::Flush),
        ("Ah Ac Kh Kc Qh Qc Js", Category::TwoPair),
        ("9c 9d 9h 9s Kc Kd Ks", Category::FourOfAKind),
        ("3c 4d 5h 6s 7c Kd Kh", Category::Straight),
    ];

    for (hand, expected) in table {
        assert_eq!(category(hand), expected, "{hand}");
    }
}

#[test]
fn straight_flush_needs_one_suit() {
    // Hearts make a flush and 5-9 make a straight, but not in the same suit.
    assert_eq!(category("5h 6h 7h 8h 9c 2h Kh"), Category::Flush);
}

#[test]
fn two_triplets_count_as_full_house() {
    let hand = cards("Ah Ad As Kc Kd Ks 2h");
    assert_eq!(evaluate(&hand).unwrap().category, Category::FullHouse);

    let five = best_five(&hand, Category::FullHouse).unwrap();
    assert_eq!(
        ranks(&five),
        [Rank::Ace, Rank::Ace, Rank::Ace, Rank::King, Rank::King]
    );
}

#[test]
fn fewer_than_five_cards_is_an_error() {
    let four = cards("Ah Ad As Kc");
    assert_eq!(evaluate(&four), Err(EvalError::InsufficientCards(4)));
    assert_eq!(
        best_five(&four, Category::HighCard),
        Err(EvalError::InsufficientCards(4))
    );
    assert_eq!(
        compare(&four, &cards("2c 3c 4c 5c 7d"), Category::HighCard),
        Err(EvalError::InsufficientCards(4))
    );
    assert_eq!(evaluate(&[]), Err(EvalError::InsufficientCards(0)));
}

#[test]
fn compare_is_a_total_order_within_a_category() {
    // Ascending strength, all One Pair.
    let sample = [
        cards("2c 2d 5h 7s 9c"),
        cards("2h 2s 5c 8d 9h"),
        cards("3c 3d 4h 5s 6c"),
        cards("Ac Ad Kh Qs Th"),
        cards("Ah As Kd Qc Jh"),
    ];

    for (i, a) in sample.iter().enumerate() {
        assert_eq!(compare(a, a, Category::OnePair), Ok(Ordering::Equal));
        for b in &sample[i + 1..] {
            assert_eq!(compare(a, b, Category::OnePair), Ok(Ordering::Less));
            assert_eq!(compare(b, a, Category::OnePair), Ok(Ordering::Greater));
        }
    }
}

#[test]
fn compare_breaks_ties_by_category_rules() {
    // Quads, then kicker.
    assert_eq!(
        compare(
            &cards("9c 9d 9h 9s Ac"),
            &cards("9c 9d 9h 9s Kc"),
            Category::FourOfAKind
        ),
        Ok(Ordering::Greater)
    );
    // Full house: triplet first, then pair.
    assert_eq!(
        compare(
            &cards("3c 3d 3h As Ac"),
            &cards("4c 4d 4h 2s 2c"),
            Category::FullHouse
        ),
        Ok(Ordering::Less)
    );
    // Two pair: high pair, low pair, kicker.
    assert_eq!(
        compare(
            &cards("Kc Kd 4h 4s 2c"),
            &cards("Kh Ks 3c 3d Ac"),
            Category::TwoPair
        ),
        Ok(Ordering::Greater)
    );
    assert_eq!(
        compare(
            &cards("Kc Kd 4h 4s 2c"),
            &cards("Kh Ks 4c 4d 3c"),
            Category::TwoPair
        ),
        Ok(Ordering::Less)
    );
    // Flush: every card in turn.
    assert_eq!(
        compare(
            &cards("Ah Jh 9h 6h 3h"),
            &cards("Ac Jc 9c 6c 2c"),
            Category::Flush
        ),
        Ok(Ordering::Greater)
    );
    // Straights: top card only, suits never matter.
    assert_eq!(
        compare(
            &cards("5c 6d 7h 8s 9c"),
            &cards("5h 6h 7c 8d 9s"),
            Category::Straight
        ),
        Ok(Ordering::Equal)
    );
    // Royal flushes always tie.
    assert_eq!(
        compare(
            &cards("Th Jh Qh Kh Ah"),
            &cards("Ts Js Qs Ks As"),
            Category::RoyalFlush
        ),
        Ok(Ordering::Equal)
    );
}

#[test]
fn best_five_picks_two_highest_pairs_and_best_kicker() {
    let hand = cards("Ah As Kh Ks Qh Qs Jc");
    let five = best_five(&hand, Category::TwoPair).unwrap();
    assert_eq!(five.len(), HAND_SIZE);
    assert_eq!(
        ranks(&five),
        [Rank::Ace, Rank::Ace, Rank::King, Rank::King, Rank::Queen]
    );
}

#[test]
fn best_five_orders_the_wheel_with_ace_last() {
    let hand = cards("5h 4c Ad 3s 2h Kc 9d");
    assert_eq!(evaluate(&hand).unwrap().category, Category::Straight);

    let five = best_five(&hand, Category::Straight).unwrap();
    assert_eq!(
        ranks(&five),
        [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]
    );
}

#[test]
fn best_five_groups_then_kickers() {
    let five = best_five(&cards("2c 9d 9h 9s Kc Jd 4h"), Category::ThreeOfAKind).unwrap();
    assert_eq!(
        ranks(&five),
        [Rank::Nine, Rank::Nine, Rank::Nine, Rank::King, Rank::Jack]
    );

    let five = best_five(&cards("7c 7d 7h 7s Kc Ad 4h"), Category::FourOfAKind).unwrap();
    assert_eq!(ranks(&five)[4], Rank::Ace);

    let five = best_five(&cards("2h 5h 9h Jh Kh Ah Kd"), Category::Flush).unwrap();
    assert!(five.iter().all(|card| card.suit == Suit::Hearts));
    assert_eq!(ranks(&five)[0], Rank::Ace);
    assert_eq!(ranks(&five)[4], Rank::Five);

    let five = best_five(&cards("9h Th Jh Qh Kh 8c 2d"), Category::StraightFlush).unwrap();
    assert_eq!(ranks(&five)[0], Rank::King);
}

#[test]
fn best_five_falls_back_to_highest_cards() {
    let hand = cards("2c 5d 9h Js Kc 3d");
    let expected = [Rank::King, Rank::Jack, Rank::Nine, Rank::Five, Rank::Three];

    assert_eq!(
        ranks(&best_five(&hand, Category::FourOfAKind).unwrap()),
        expected
    );
    assert_eq!(
        ranks(&best_five(&hand, Category::RoyalFlush).unwrap()),
        expected
    );
    assert_eq!(
        ranks(&best_five(&hand, Category::HighCard).unwrap()),
        expected
    );
}

#[test]
fn evaluate_winner_without_players_fails() {
    assert_eq!(
        evaluate_winner(std::iter::empty()),
        Err(EvalError::NoPlayers)
    );
}

#[test]
fn trips_beat_a_pair() {
    let pair = cards("Ah As Kd Qc Jh");
    let trips = cards("Kh Ks Kd Qc Jh");

    let outcome = evaluate_winner([(0, pair.as_slice()), (1, trips.as_slice())]).unwrap();
    assert_eq!(outcome.winners, [1]);
    assert_eq!(outcome.losers, [0]);
    assert_eq!(outcome.category, Category::ThreeOfAKind);
    assert_eq!(outcome.category.name(), "Three of a Kind");
}

#[test]
fn kicker_breaks_a_pair_tie() {
    let jack = cards("Ah As Kd Qc Jh");
    let ten = cards("Ac Ad Kh Qs Th");

    let outcome = evaluate_winner([(0, jack.as_slice()), (1, ten.as_slice())]).unwrap();
    assert_eq!(outcome.winners, [0]);
    assert_eq!(outcome.losers, [1]);
    assert_eq!(outcome.category.name(), "One Pair");
}

#[test]
fn exact_ties_share_the_win() {
    let a = cards("Ah Kd 9c 7s 3h");
    let b = cards("As Kc 9d 7h 3c");

    let outcome = evaluate_winner([(4, a.as_slice()), (7, b.as_slice())]).unwrap();
    assert_eq!(outcome.winners, [4, 7]);
    assert!(outcome.losers.is_empty());
    assert_eq!(outcome.category, Category::HighCard);
}

#[test]
fn stronger_hand_replaces_tied_winners() {
    let a = cards("2c 2d 5h 7s 9c");
    let b = cards("2h 2s 5c 7d 9h");
    let flush = cards("3h 6h 8h Th Qh");

    let outcome = evaluate_winner([
        (0, a.as_slice()),
        (1, b.as_slice()),
        (2, flush.as_slice()),
    ])
    .unwrap();
    assert_eq!(outcome.winners, [2]);
    assert_eq!(outcome.losers, [0, 1]);
    assert_eq!(outcome.category, Category::Flush);
}

#[test]
fn every_hand_is_shown_with_its_best_five() {
    let seven = cards("Ah As Kh Ks Qh Qs Jc");
    let pair = cards("2c 2d 5h 7s 9c");

    let outcome = evaluate_winner([(0, seven.as_slice()), (1, pair.as_slice())]).unwrap();
    assert_eq!(outcome.hands.len(), 2);

    let winner = &outcome.hands[0];
    assert_eq!(winner.player_id, 0);
    assert_eq!(winner.category, Category::TwoPair);
    assert_eq!(ranks(&winner.cards)[4], Rank::Queen);

    let loser = &outcome.hands[1];
    assert_eq!(loser.player_id, 1);
    assert_eq!(loser.category, Category::OnePair);
    assert_eq!(
        ranks(&loser.cards),
        [Rank::Two, Rank::Two, Rank::Nine, Rank::Seven, Rank::Five]
    );
}
