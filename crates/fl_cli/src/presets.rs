//! The default seven-club league.

use fl_core::{ClubSeed, Formation};

fn origins(nations: &[&str]) -> Vec<String> {
    nations.iter().map(|n| n.to_string()).collect()
}

pub fn default_clubs() -> Vec<ClubSeed> {
    vec![
        ClubSeed {
            name: "Eastport Rovers".to_string(),
            stadium: "Harbour Lane".to_string(),
            origins: origins(&["England", "Nigeria", "Netherlands"]),
            formation: Formation::F433,
            objective: 1,
            rating_target: 84,
            budget: 180,
        },
        ClubSeed {
            name: "Union Caldera".to_string(),
            stadium: "Estadio del Sol".to_string(),
            origins: origins(&["Spain", "Argentina", "Colombia"]),
            formation: Formation::F442,
            objective: 2,
            rating_target: 83,
            budget: 160,
        },
        ClubSeed {
            name: "Northbridge City".to_string(),
            stadium: "Bridgegate Park".to_string(),
            origins: origins(&["England", "France", "Senegal"]),
            formation: Formation::F433,
            objective: 3,
            rating_target: 82,
            budget: 140,
        },
        ClubSeed {
            name: "Weissfeld 04".to_string(),
            stadium: "Kristallarena".to_string(),
            origins: origins(&["Germany", "Croatia", "Japan"]),
            formation: Formation::F352,
            objective: 4,
            rating_target: 81,
            budget: 110,
        },
        ClubSeed {
            name: "Atletico Riviera".to_string(),
            stadium: "La Costa".to_string(),
            origins: origins(&["Italy", "Uruguay", "Brazil"]),
            formation: Formation::F442,
            objective: 5,
            rating_target: 79,
            budget: 90,
        },
        ClubSeed {
            name: "Real Miraflores".to_string(),
            stadium: "Campo Alto".to_string(),
            origins: origins(&["Chile", "Spain", "Portugal"]),
            formation: Formation::F433,
            objective: 6,
            rating_target: 78,
            budget: 75,
        },
        ClubSeed {
            name: "Kawasaki Phoenix".to_string(),
            stadium: "Sakura Dome".to_string(),
            origins: origins(&["Japan", "Belgium", "England"]),
            formation: Formation::F352,
            objective: 7,
            rating_target: 77,
            budget: 60,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_clubs_with_unique_names() {
        let clubs = default_clubs();
        assert_eq!(clubs.len(), 7);
        let mut names: Vec<_> = clubs.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 7);
        for club in &clubs {
            assert!(!club.origins.is_empty());
            assert!((1..=7).contains(&club.objective));
        }
    }
}
