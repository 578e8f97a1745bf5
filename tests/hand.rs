//! Hand classification and scoring integration tests.

use fivecard::eval::{self, has_ace_low_sequence, has_sequential_order, segment_match, segment_sort};
use fivecard::{
    Card, Category, Deck, DeckOptions, HAND_SIZE, Hand, HandError, ParseCardError, Rank, Suit,
};

fn hand(s: &str) -> Hand {
    s.parse().unwrap()
}

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn score(s: &str) -> u32 {
    hand(s).score().value()
}

/// Maps every suit onto another one.
fn resuit(hand: &Hand, map: impl Fn(Suit) -> Suit) -> Hand {
    Hand::from_cards(hand.cards().map(|c| Card::new(c.rank, map(c.suit))))
}

const fn rotate_suit(suit: Suit) -> Suit {
    match suit {
        Suit::Hearts => Suit::Diamonds,
        Suit::Diamonds => Suit::Clubs,
        Suit::Clubs => Suit::Spades,
        Suit::Spades => Suit::Hearts,
    }
}

/// One hand of each category, strongest first.
const SAMPLES: [(&str, Category); 10] = [
    ("AS KS QS JS 10S", Category::RoyalFlush),
    ("9D 8D 7D 6D 5D", Category::StraightFlush),
    ("7H 7S 7D 7C 2H", Category::FourOfAKind),
    ("QH QS QD 4C 4H", Category::FullHouse),
    ("KC 10C 8C 4C 2C", Category::Flush),
    ("10H 9S 8D 7C 6H", Category::Straight),
    ("5H 5S 5D KC 2H", Category::ThreeOfAKind),
    ("JH JS 4D 4C AH", Category::TwoPair),
    ("8H 8S KD 6C 3H", Category::OnePair),
    ("AH QS 9D 6C 3H", Category::HighCard),
];

#[test]
fn card_values_and_display() {
    let ace = Card::new(Rank::Ace, Suit::Diamonds);
    assert_eq!(ace.face_value(), 1);
    assert_eq!(ace.game_value(), 14);
    assert_eq!(ace.to_string(), "AD");

    let ten = Card::new(Rank::Ten, Suit::Spades);
    assert_eq!(ten.face_value(), 10);
    assert_eq!(ten.game_value(), 10);
    assert_eq!(ten.to_string(), "10S");

    let queen = card("qh");
    assert_eq!(queen, Card::new(Rank::Queen, Suit::Hearts));
    assert_eq!(queen.to_string(), "QH");
    assert_eq!(card("TC"), Card::new(Rank::Ten, Suit::Clubs));
    assert_eq!(Suit::Spades.symbol(), '♠');
}

#[test]
fn card_parse_errors() {
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("S".parse::<Card>(), Err(ParseCardError::MissingRank));
    assert_eq!("1S".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("11S".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("10X".parse::<Card>(), Err(ParseCardError::InvalidSuit));
}

#[test]
fn hand_parse_errors() {
    assert_eq!("AS KS QS JS".parse::<Hand>(), Err(HandError::WrongSize(4)));
    assert_eq!(
        "AS KS QS JS 10S 9S".parse::<Hand>(),
        Err(HandError::WrongSize(6))
    );
    assert_eq!(
        "AS KS QS JS AS".parse::<Hand>(),
        Err(HandError::DuplicateCard(card("AS")))
    );
    assert_eq!(
        "AS KS QS JS 10X".parse::<Hand>(),
        Err(HandError::Card(ParseCardError::InvalidSuit))
    );

    let cards = [card("AS"), card("KS")];
    assert_eq!(
        Hand::try_from(&cards[..]).unwrap_err(),
        HandError::WrongSize(2)
    );
}

#[test]
fn hand_is_sorted_and_displayed_with_game_values() {
    let hand = hand("10S JS AS QS KS");
    assert_eq!(hand.to_string(), "AS(14) KS(13) QS(12) JS(11) 10S(10)");

    let values: Vec<u8> = hand.cards().iter().map(Card::game_value).collect();
    assert_eq!(values, [14, 13, 12, 11, 10]);
}

#[test]
fn equal_values_sort_by_suit() {
    let first = hand("KH KD 9S 5C 2H");
    let second = hand("KD KH 9S 5C 2H");
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "KH(13) KD(13) 9S(9) 5C(5) 2H(2)");
    assert_ne!(first, hand("KH KS 9S 5C 2H"));
}

#[test]
fn each_sample_has_its_category() {
    for (cards, category) in SAMPLES {
        let hand = hand(cards);
        assert_eq!(hand.category(), category, "{cards}");
        assert_eq!(eval::classify(hand.cards()), category, "{cards}");
    }
}

#[test]
fn exactly_one_predicate_holds() {
    let check = |hand: &Hand| {
        let predicates = [
            hand.is_royal_flush(),
            hand.is_straight_flush(),
            hand.is_four_of_a_kind(),
            hand.is_full_house(),
            hand.is_flush(),
            hand.is_straight(),
            hand.is_three_of_a_kind(),
            hand.is_two_pair(),
            hand.is_one_pair(),
            hand.is_high_card(),
        ];
        assert_eq!(predicates.iter().filter(|&&p| p).count(), 1, "{hand}");

        let matching: Vec<Category> = Category::BY_PRIORITY
            .into_iter()
            .filter(|category| category.matches(hand.cards()))
            .collect();
        assert_eq!(matching, [hand.category()], "{hand}");
    };

    for (cards, _) in SAMPLES {
        check(&hand(cards));
    }

    for seed in 0..2_000 {
        let deck = Deck::new(DeckOptions::default(), seed);
        for _ in 0..10 {
            check(&Hand::deal(&deck).unwrap());
        }
    }
}

#[test]
fn segment_match_is_exact() {
    let trips = hand("5H 5S 5D KC 2H");
    assert!(segment_match(trips.cards(), 3));
    assert!(!segment_match(trips.cards(), 2));
    assert!(!segment_match(trips.cards(), 4));

    let pair = hand("8H 8S KD 6C 3H");
    assert!(segment_match(pair.cards(), 2));
    assert!(!segment_match(pair.cards(), 3));

    let full_house = hand("QH QS QD 4C 4H");
    assert!(segment_match(full_house.cards(), 3));
    assert!(segment_match(full_house.cards(), 2));

    let quads = hand("7H 7S 7D 7C 2H");
    assert!(segment_match(quads.cards(), 4));
    assert!(!segment_match(quads.cards(), 2));
    assert!(!segment_match(quads.cards(), 3));
}

#[test]
fn segment_sort_moves_run_to_front() {
    let pair = hand("KD 8H 8S 6C 3H");
    let sorted = segment_sort(pair.cards(), 2).unwrap();
    let values: Vec<u8> = sorted.iter().map(Card::game_value).collect();
    assert_eq!(values, [8, 8, 13, 6, 3]);

    let quads = hand("AH 2S 2H 2D 2C");
    let sorted = segment_sort(quads.cards(), 4).unwrap();
    let values: Vec<u8> = sorted.iter().map(Card::game_value).collect();
    assert_eq!(values, [2, 2, 2, 2, 14]);

    assert_eq!(segment_sort(pair.cards(), 3), None);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let wheel = hand("AH 5D 4C 3S 2H");
    assert!(wheel.is_straight());
    assert!(has_ace_low_sequence(wheel.cards()));
    assert!(has_sequential_order(wheel.cards()));
    assert_eq!(wheel.score().value(), Category::Straight.base_score() + 5);

    let six_high = hand("6H 5D 4C 3S 2H");
    assert!(!has_ace_low_sequence(six_high.cards()));
    assert!(six_high.score() > wheel.score());

    let steel_wheel = hand("AS 5S 4S 3S 2S");
    assert!(steel_wheel.is_straight_flush());
    assert!(!steel_wheel.is_royal_flush());
    assert_eq!(
        steel_wheel.score().value(),
        Category::StraightFlush.base_score() + 5
    );
    assert!(hand("6S 5S 4S 3S 2S").score() > steel_wheel.score());
}

#[test]
fn no_wraparound_straights() {
    assert!(hand("KH AD 2C 3S 4H").is_high_card());
    assert!(hand("QH KD AC 2S 3H").is_high_card());
}

#[test]
fn two_pair_scores_pairs_then_kicker() {
    let hand = hand("4D 4C 3S 3H 2D");
    assert!(hand.is_two_pair());
    assert_eq!(hand.score().value(), 3 * 100_000_000 + 4 * 225 + 3 * 15 + 2);

    // kicker in front and in the middle of the sorted cards
    assert_eq!(score("KD 4C 4S 3H 3D"), 300_000_000 + 4 * 225 + 3 * 15 + 13);
    assert_eq!(score("9D 9C 5S 3H 3D"), 300_000_000 + 9 * 225 + 3 * 15 + 5);
}

#[test]
fn exact_scores_per_category() {
    assert_eq!(score("AS KS QS JS 10S"), 1_000_000_000);
    assert_eq!(score("AH KH QH JH 10H"), 1_000_000_000);
    assert_eq!(score("9D 8D 7D 6D 5D"), 900_000_000 + 9);
    assert_eq!(score("7H 7S 7D 7C 2H"), 800_000_000 + 7 * 15 + 2);
    assert_eq!(score("QH QS QD 4C 4H"), 700_000_000 + 12);
    assert_eq!(
        score("KC 10C 8C 4C 2C"),
        600_000_000 + 13 * 50_625 + 10 * 3_375 + 8 * 225 + 4 * 15 + 2
    );
    assert_eq!(score("10H 9S 8D 7C 6H"), 500_000_000 + 10);
    assert_eq!(score("5H 5S 5D KC 2H"), 400_000_000 + 5);
    assert_eq!(score("JH JS 4D 4C AH"), 300_000_000 + 11 * 225 + 4 * 15 + 14);
    assert_eq!(
        score("8H 8S KD 6C 3H"),
        200_000_000 + 8 * 3_375 + 13 * 225 + 6 * 15 + 3
    );
    assert_eq!(
        score("AH QS 9D 6C 3H"),
        100_000_000 + 14 * 50_625 + 12 * 3_375 + 9 * 225 + 6 * 15 + 3
    );
}

#[test]
fn weakest_of_each_category_beats_strongest_below() {
    let boundaries = [
        ("AS KS QS JS 10S", "KS QS JS 10S 9S"),
        ("6S 5S 4S 3S 2S", "AS AH AD AC KS"),
        ("2S 2H 2D 2C 3S", "AS AH AD KC KS"),
        ("2S 2H 2D 3C 3S", "AS KS QS JS 9S"),
        ("7S 5S 4S 3S 2S", "AS KH QS JS 10S"),
        ("5S 4H 3S 2S AD", "AS AH AD KC QS"),
        ("2S 2H 2D 3C 4S", "AS AH KD KC QS"),
        ("3S 3H 2D 2C 4S", "AS AH KD QC JS"),
        ("2S 2H 3D 4C 5S", "AS KH QD JC 9S"),
    ];

    for (stronger, weaker) in boundaries {
        let (stronger, weaker) = (hand(stronger), hand(weaker));
        assert!(stronger.category() > weaker.category(), "{stronger} vs {weaker}");
        assert!(stronger.score() > weaker.score(), "{stronger} vs {weaker}");
    }
}

#[test]
fn kickers_break_ties_in_order() {
    let ordered = [
        ("2H 2S 2D 2C 4H", "2H 2S 2D 2C 3H"),
        ("3H 3S 3D 2C 2H", "2H 2S 2D AC AH"),
        ("AC 9C 8C 4C 2C", "AC 9C 7C 5C 3C"),
        ("KH QS JD 10C 9H", "QH JS 10D 9C 8H"),
        ("QH QS 8D 8C 5H", "QH QS 7D 7C AH"),
        ("QH QS 7D 7C 6H", "QH QS 7D 7C 5H"),
        ("8H 8S KD 6C 4H", "8H 8S KD 6C 3H"),
        ("9H 9S 3D 2C 4H", "8H 8S AD KC QH"),
        ("AH QS 9D 6C 4H", "AH QS 9D 6C 3H"),
        ("AH 3S 4D 5C 7H", "KH QS JD 9C 8H"),
    ];

    for (stronger, weaker) in ordered {
        let (stronger, weaker) = (hand(stronger), hand(weaker));
        assert_eq!(stronger.category(), weaker.category(), "{stronger} vs {weaker}");
        assert!(stronger.score() > weaker.score(), "{stronger} vs {weaker}");
    }
}

#[test]
fn suits_never_change_a_score() {
    for (cards, _) in SAMPLES {
        let original = hand(cards);
        let mut resuited = original.clone();
        for _ in 0..3 {
            resuited = resuit(&resuited, rotate_suit);
            assert_eq!(resuited.score(), original.score(), "{original} vs {resuited}");
            assert_eq!(resuited.compare(&original), core::cmp::Ordering::Equal);
        }
    }

    let first = hand("KH KD 9S 5C 2H");
    let second = hand("KS KC 9H 5D 2C");
    assert_eq!(first.score(), second.score());
}

#[test]
fn set_cards_reclassifies() {
    let mut hand = hand("AH QS 9D 6C 3H");
    assert!(hand.is_high_card());

    hand.set_cards([card("2C"), card("7H"), card("7S"), card("7D"), card("2H")]);
    assert!(hand.is_full_house());
    assert_eq!(hand.cards()[0].game_value(), 7);
    assert_eq!(hand.cards()[HAND_SIZE - 1].game_value(), 2);
}

#[test]
fn category_order_and_names() {
    let mut by_priority = Category::BY_PRIORITY;
    by_priority.reverse();
    assert!(by_priority.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(
        by_priority
            .windows(2)
            .all(|pair| pair[1].base_score() - pair[0].base_score() == 100_000_000)
    );

    assert_eq!(Category::HighCard.base_score(), 100_000_000);
    assert_eq!(Category::RoyalFlush.base_score(), 1_000_000_000);
    assert_eq!(Category::FourOfAKind.to_string(), "Four Of A Kind");
    assert_eq!(Category::HighCard.to_string(), "High Hand");
}

#[test]
#[ignore = "walks all 2,598,960 hands"]
fn category_counts_over_every_hand() {
    let pack = fivecard::full_pack();
    let mut counts = [0_u32; 10];
    let mut hand = Hand::from_cards([pack[0], pack[1], pack[2], pack[3], pack[4]]);

    for a in 0..pack.len() {
        for b in a + 1..pack.len() {
            for c in b + 1..pack.len() {
                for d in c + 1..pack.len() {
                    for e in d + 1..pack.len() {
                        hand.set_cards([pack[a], pack[b], pack[c], pack[d], pack[e]]);
                        counts[hand.category() as usize] += 1;
                    }
                }
            }
        }
    }

    assert_eq!(
        counts,
        [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4]
    );
}
