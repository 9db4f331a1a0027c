//! Player name generation.
//!
//! Per-nation first/last name banks with a handful of national quirks:
//! Spanish-speaking nations take double surnames, Dutch surnames carry a
//! tussenvoegsel at times, Japanese names put the family name first, and
//! unknown nations fall back to syllable construction. Uniqueness is
//! enforced across a league's lifetime with numeric suffixes.

use fxhash::{FxHashMap, FxHashSet};
use once_cell::sync::Lazy;
use rand::Rng;

struct NameBank {
    first: &'static [&'static str],
    last: &'static [&'static str],
}

macro_rules! bank {
    ($first:expr, $last:expr) => {
        NameBank {
            first: &$first,
            last: &$last,
        }
    };
}

static BANKS: Lazy<FxHashMap<&'static str, NameBank>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert(
        "England",
        bank!(
            ["Harry", "Jack", "Oliver", "George", "Lewis", "Callum", "Jordan", "Reece", "Mason", "Kieran"],
            ["Smith", "Walker", "Turner", "Shaw", "Barnes", "Palmer", "Hughes", "Gibson", "Dawson", "Clarke"]
        ),
    );
    m.insert(
        "Spain",
        bank!(
            ["Sergio", "Iker", "Pablo", "Alvaro", "Dani", "Marcos", "Javi", "Raul", "Adrian", "Mikel"],
            ["Garcia", "Fernandez", "Lopez", "Martinez", "Sanchez", "Torres", "Navarro", "Moreno", "Ortega", "Vazquez"]
        ),
    );
    m.insert(
        "France",
        bank!(
            ["Antoine", "Hugo", "Lucas", "Theo", "Kylian", "Olivier", "Jules", "Mathis", "Romain", "Bastien"],
            ["Dubois", "Lefevre", "Moreau", "Girard", "Bernard", "Lambert", "Rousseau", "Mercier", "Blanc", "Renard"]
        ),
    );
    m.insert(
        "Germany",
        bank!(
            ["Leon", "Niklas", "Jonas", "Florian", "Timo", "Kai", "Lukas", "Moritz", "Felix", "Jannik"],
            ["Muller", "Schmidt", "Fischer", "Weber", "Wagner", "Becker", "Hoffmann", "Schulz", "Krause", "Brandt"]
        ),
    );
    m.insert(
        "Italy",
        bank!(
            ["Lorenzo", "Matteo", "Federico", "Alessandro", "Nicolo", "Davide", "Marco", "Simone", "Gianluca", "Riccardo"],
            ["Rossi", "Esposito", "Romano", "Ferrari", "Ricci", "Greco", "Conti", "Gallo", "Mancini", "Barone"]
        ),
    );
    m.insert(
        "Portugal",
        bank!(
            ["Joao", "Diogo", "Bruno", "Ruben", "Goncalo", "Tiago", "Andre", "Vitor", "Nuno", "Rafael"],
            ["Silva", "Santos", "Ferreira", "Pereira", "Costa", "Oliveira", "Carvalho", "Fonseca", "Ramos", "Moreira"]
        ),
    );
    m.insert(
        "Netherlands",
        bank!(
            ["Daan", "Sven", "Jurgen", "Thijs", "Lars", "Ruud", "Wout", "Joost", "Niels", "Bram"],
            ["Berg", "Dijk", "Meer", "Vries", "Bosch", "Linden", "Leeuwen", "Heuvel", "Broek", "Dam"]
        ),
    );
    m.insert(
        "Belgium",
        bank!(
            ["Thibaut", "Kevin", "Dries", "Youri", "Axel", "Maxime", "Arne", "Senne", "Jelle", "Bart"],
            ["Peeters", "Janssens", "Maes", "Claes", "Wouters", "Mertens", "Willems", "Goossens", "Aerts", "Segers"]
        ),
    );
    m.insert(
        "Croatia",
        bank!(
            ["Luka", "Mateo", "Ivan", "Marko", "Ante", "Josip", "Nikola", "Dario", "Petar", "Tomislav"],
            ["Kovacevic", "Babic", "Maric", "Juric", "Horvat", "Novak", "Pavlovic", "Vukovic", "Matic", "Petrovic"]
        ),
    );
    m.insert(
        "Brazil",
        bank!(
            ["Gabriel", "Thiago", "Lucas", "Matheus", "Vinicius", "Rodrigo", "Caio", "Felipe", "Eder", "Wesley"],
            ["Souza", "Lima", "Araujo", "Ribeiro", "Cardoso", "Barbosa", "Teixeira", "Farias", "Moura", "Batista"]
        ),
    );
    m.insert(
        "Argentina",
        bank!(
            ["Lionel", "Julian", "Lautaro", "Emiliano", "Nicolas", "Gonzalo", "Franco", "Matias", "Ezequiel", "Agustin"],
            ["Gomez", "Diaz", "Alvarez", "Romero", "Acuna", "Molina", "Paredes", "Correa", "Herrera", "Sosa"]
        ),
    );
    m.insert(
        "Uruguay",
        bank!(
            ["Facundo", "Diego", "Maximiliano", "Rodrigo", "Sebastian", "Dario", "Nahitan", "Edinson", "Giorgian", "Bruno"],
            ["Caceres", "Pereiro", "Valverde", "Gimenez", "Suarez", "Cavani", "Vecino", "Godin", "Araujo", "Olivera"]
        ),
    );
    m.insert(
        "Chile",
        bank!(
            ["Alexis", "Arturo", "Claudio", "Eduardo", "Mauricio", "Gary", "Erick", "Charles", "Marcelo", "Esteban"],
            ["Vidal", "Sanchez", "Bravo", "Isla", "Aranguiz", "Medel", "Pulgar", "Maripan", "Vargas", "Pinares"]
        ),
    );
    m.insert(
        "Colombia",
        bank!(
            ["James", "Radamel", "Juan", "Duvan", "Luis", "Wilmar", "Davinson", "Yerry", "Mateus", "Rafael"],
            ["Rodriguez", "Falcao", "Cuadrado", "Zapata", "Muriel", "Barrios", "Sanchez", "Mina", "Uribe", "Borre"]
        ),
    );
    m.insert(
        "Japan",
        bank!(
            ["Takumi", "Kaoru", "Daichi", "Ritsu", "Wataru", "Hiroki", "Takehiro", "Junya", "Reo", "Ayase"],
            ["Minamino", "Mitoma", "Kamada", "Doan", "Endo", "Ito", "Tomiyasu", "Ueda", "Hatate", "Kubo"]
        ),
    );
    m.insert(
        "Nigeria",
        bank!(
            ["Victor", "Samuel", "Kelechi", "Wilfred", "Alex", "Moses", "Ademola", "Frank", "Joe", "Terem"],
            ["Osimhen", "Chukwueze", "Iheanacho", "Ndidi", "Iwobi", "Simon", "Lookman", "Onyeka", "Aribo", "Moffi"]
        ),
    );
    m.insert(
        "Senegal",
        bank!(
            ["Sadio", "Idrissa", "Kalidou", "Ismaila", "Boulaye", "Abdou", "Pape", "Cheikhou", "Nampalys", "Iliman"],
            ["Mane", "Gueye", "Koulibaly", "Sarr", "Dia", "Diallo", "Cisse", "Kouyate", "Mendy", "Ndiaye"]
        ),
    );
    m
});

/// Nations translate surnames with double-barrel maternal names.
const DOUBLE_SURNAME: [&str; 5] = ["Spain", "Chile", "Colombia", "Argentina", "Uruguay"];

const DUTCH_PREFIXES: [&str; 4] = ["van", "van der", "de", "van den"];
const DUTCH_PREFIX_P: f64 = 0.4;

const SYLLABLES: [&str; 12] = [
    "ka", "ro", "mi", "ta", "len", "dor", "va", "ni", "sel", "bo", "ran", "du",
];

/// Every nation with a configured name bank.
pub fn nations() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = BANKS.keys().copied().collect();
    all.sort_unstable();
    all
}

/// Stateful name source. One per league, so uniqueness holds across clubs
/// and seasons.
#[derive(Debug, Default)]
pub struct NameGen {
    used: FxHashSet<String>,
}

impl NameGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next<R: Rng>(&mut self, nation: &str, rng: &mut R) -> String {
        let base = self.raw_name(nation, rng);
        let unique = self.deduplicate(base);
        self.used.insert(unique.clone());
        unique
    }

    fn raw_name<R: Rng>(&self, nation: &str, rng: &mut R) -> String {
        let Some(bank) = BANKS.get(nation) else {
            return self.syllable_name(rng);
        };
        let first = bank.first[rng.gen_range(0..bank.first.len())];
        let last = bank.last[rng.gen_range(0..bank.last.len())];

        if DOUBLE_SURNAME.contains(&nation) {
            let mut second = bank.last[rng.gen_range(0..bank.last.len())];
            if second == last {
                second = bank.last[(bank.last.iter().position(|&l| l == last).unwrap_or(0) + 1)
                    % bank.last.len()];
            }
            return format!("{first} {last} {second}");
        }
        if nation == "Netherlands" && rng.gen_bool(DUTCH_PREFIX_P) {
            let prefix = DUTCH_PREFIXES[rng.gen_range(0..DUTCH_PREFIXES.len())];
            return format!("{first} {prefix} {last}");
        }
        if nation == "Japan" {
            // Family name first.
            return format!("{last} {first}");
        }
        format!("{first} {last}")
    }

    fn syllable_name<R: Rng>(&self, rng: &mut R) -> String {
        let word = |rng: &mut R, len: usize| {
            let mut w = String::new();
            for _ in 0..len {
                w.push_str(SYLLABLES[rng.gen_range(0..SYLLABLES.len())]);
            }
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => w,
            }
        };
        let first = word(rng, 2);
        let last_len = rng.gen_range(2..=3);
        let last = word(rng, last_len);
        format!("{first} {last}")
    }

    fn deduplicate(&self, base: String) -> String {
        if !self.used.contains(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base} #{n}");
            if !self.used.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn same_seed_same_name() {
        let mut a = NameGen::new();
        let mut b = NameGen::new();
        let mut rng_a = ChaCha8Rng::seed_from_u64(11);
        let mut rng_b = ChaCha8Rng::seed_from_u64(11);
        for nation in ["England", "Japan", "Netherlands", "Atlantis"] {
            assert_eq!(a.next(nation, &mut rng_a), b.next(nation, &mut rng_b));
        }
    }

    #[test]
    fn every_nation_yields_a_name() {
        let mut gen = NameGen::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for nation in nations() {
            let name = gen.next(nation, &mut rng);
            assert!(name.split_whitespace().count() >= 2, "{nation}: {name}");
        }
        assert_eq!(nations().len(), 17);
    }

    #[test]
    fn collisions_take_numeric_suffixes() {
        let mut gen = NameGen::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut seen = FxHashSet::default();
        let mut suffixed = false;
        for _ in 0..400 {
            let name = gen.next("England", &mut rng);
            assert!(seen.insert(name.clone()), "duplicate produced: {name}");
            suffixed |= name.contains('#');
        }
        // 10x10 combinations cannot cover 400 draws without suffixing.
        assert!(suffixed);
    }

    #[test]
    fn spanish_names_are_double_barrelled() {
        let mut gen = NameGen::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20 {
            let name = gen.next("Spain", &mut rng);
            let words = name
                .split_whitespace()
                .filter(|w| !w.starts_with('#'))
                .count();
            assert_eq!(words, 3, "{name}");
        }
    }

    #[test]
    fn unknown_nation_falls_back_to_syllables() {
        let mut gen = NameGen::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let name = gen.next("Atlantis", &mut rng);
        assert!(!name.is_empty());
        assert_eq!(name.split_whitespace().count(), 2);
    }
}
