//! Seed roster and synthetic player names.
//!
//! `SEED_ROSTER` is the fixed list inserted when the players table is empty.
//! `synthetic_name` builds additional "FirstName, the Epithet" players for
//! bulk seeding; collisions are expected and skipped by the inserter.

use rand::seq::SliceRandom;
use rand::Rng;

/// Fixed roster inserted by the schema initializer when the table is empty.
/// Names are unique in the database; duplicates in this list are skipped.
pub const SEED_ROSTER: [&str; 60] = [
    "Aella, the Steadfast",
    "Cassia, the Untamed",
    "Cyrus, the Stormbringer",
    "Elara, the Dawnbringer",
    "Felix, the Fabled",
    "Gideon, the Unyielding",
    "Hadrian, the Wallbuilder",
    "Iris, the Weaver of Dreams",
    "Jaxon, the Ironscale",
    "Kallista, the Huntress",
    "Lysander, the Cunning",
    "Mara, the Voice of Thunder",
    "Nero, the Shadow",
    "Octavia, the Indomitable",
    "Petal, the Whisperer",
    "Quintus, the Eagle-Eyed",
    "Rhea, the Tidemother",
    "Sabina, the Savage",
    "Titus, the Last Stand",
    "Ulysses, the Wanderer",
    "Anya, of the Whispering Woods",
    "Bjorn, the Mountain-Breaker",
    "Caoimhe, the Weaver of Fate",
    "Darius, the Sun-King",
    "Elara, the Moonlit",
    "Finn, the Seafarer",
    "Griselda, the Alchemist",
    "Hector, the Lionhearted",
    "Indigo, the Shadow Dancer",
    "Jace, the Stormrider",
    "Kallista, the Flame-haired",
    "Lyra, the Songstress",
    "Marius, the Stonewall",
    "Nova, the Stargazer",
    "Octavia, the Unyielding",
    "Peregrine, the Falcon",
    "Quintus, the Navigator",
    "Rhea, the Wild Huntress",
    "Sabina, the Silver-tongued",
    "Titus, the Serpent",
    "Alistair, of the Northern Wastes",
    "Brielle, the Fierce",
    "Cassian, the Skyborn",
    "Dara, the Unbroken",
    "Elara, the Gale",
    "Finnian, the Bard",
    "Gwendolyn, the Dragonslayer",
    "Hector, the Thunderous",
    "Isla, the Weaver of Illusions",
    "Jax, the Howling Wind",
    "Kallista, the Emerald-Eyed",
    "Leyla, the Night Dancer",
    "Marcus, the Steadfast",
    "Nova, the Star-Forged",
    "Octavia, the Falconer",
    "Peregrine, the Silent",
    "Quintus, the Scholar",
    "Rhea, the Storm's Fury",
    "Sabina, the Blade Singer",
    "Titus, the Redeemer",
];

const FIRST_NAMES: [&str; 24] = [
    "Aldric", "Beatrix", "Cedric", "Delphine", "Edmund", "Freya", "Garrick", "Helena", "Ivor",
    "Juniper", "Kieran", "Lucinda", "Magnus", "Nadia", "Osric", "Primrose", "Quill", "Rosalind",
    "Soren", "Thalia", "Ulric", "Vivienne", "Wren", "Yrsa",
];

const EPITHETS: [&str; 24] = [
    "the Merciless",
    "the Humble",
    "the Wise",
    "the Valiant",
    "the Swift",
    "the Just",
    "the Cunning",
    "the Steadfast",
    "the Bold",
    "the Unseen",
    "the Radiant",
    "the Enduring",
    "the Fierce",
    "the Benevolent",
    "the Tempestuous",
    "the Vigilant",
    "the Ironclad",
    "the Unbound",
    "the Resolute",
    "the Astute",
    "the Dire",
    "the Unfortunate",
    "the Glutton",
    "the Sad",
];

/// Generate a synthetic "FirstName, the Epithet" display name.
pub fn synthetic_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).unwrap();
    let epithet = EPITHETS.choose(rng).unwrap();
    format!("{first}, {epithet}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_sixty_names() {
        assert_eq!(SEED_ROSTER.len(), 60);
        assert!(SEED_ROSTER.iter().all(|name| !name.is_empty()));
    }

    #[test]
    fn synthetic_names_have_epithet_form() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let name = synthetic_name(&mut rng);
            assert!(name.contains(", "), "unexpected name shape: {name}");
        }
    }
}
