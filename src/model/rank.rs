//! Static rank ladder unlocked by lifetime farmed total.

/// A named tier unlocked once a user's lifetime farmed total reaches `requirement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub name: &'static str,
    pub requirement: i64,
    pub ordinal: usize,
}

/// All ranks ordered by `requirement`; `RANKS[i].ordinal == i`.
#[rustfmt::skip]
pub static RANKS: [Rank; 15] = [
    //      | Rank Name              | Required  | Ordinal |
    Rank { name: "Shroom Forager",      requirement: 0,         ordinal: 0 },
    Rank { name: "Fungi Farmer",        requirement: 50,        ordinal: 1 },
    Rank { name: "Truffle Hunter",      requirement: 100,       ordinal: 2 },
    Rank { name: "Mycology Enthusiast", requirement: 250,       ordinal: 3 },
    Rank { name: "Fungi Apprentice",    requirement: 500,       ordinal: 4 },
    Rank { name: "Truffle Collector",   requirement: 1_000,     ordinal: 5 },
    Rank { name: "Shroom Maestro",      requirement: 2_500,     ordinal: 6 },
    Rank { name: "Truffle Connoisseur", requirement: 5_000,     ordinal: 7 },
    Rank { name: "Fungi Master",        requirement: 10_000,    ordinal: 8 },
    Rank { name: "Mycologist",          requirement: 25_000,    ordinal: 9 },
    Rank { name: "Shroom Baron",        requirement: 50_000,    ordinal: 10 },
    Rank { name: "Truffle King/Queen",  requirement: 100_000,   ordinal: 11 },
    Rank { name: "Fungi Overlord",      requirement: 250_000,   ordinal: 12 },
    Rank { name: "Mycology Mogul",      requirement: 500_000,   ordinal: 13 },
    Rank { name: "Shroom Deity",        requirement: 1_000_000, ordinal: 14 },
];

/// Highest rank whose requirement is at most `farmed`.
///
/// A user sitting exactly on a threshold holds that rank. Negative totals map
/// to the lowest rank.
pub fn rank_for(farmed: i64) -> &'static Rank {
    RANKS
        .iter()
        .rev()
        .find(|rank| rank.requirement <= farmed)
        .unwrap_or(&RANKS[0])
}

/// The rank after `ordinal`, or `None` at the top of the ladder.
pub fn next_rank(ordinal: usize) -> Option<&'static Rank> {
    RANKS.get(ordinal.checked_add(1)?)
}

/// Looks up a rank by ordinal.
pub fn rank(ordinal: usize) -> Option<&'static Rank> {
    RANKS.get(ordinal)
}
