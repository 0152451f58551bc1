//! Demo catalog loaded into in-memory stores

use crate::domain::movie::{Director, Genre, Movie, MovieId};

fn genre(name: &str, description: &str) -> Genre {
    Genre {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn director(name: &str, bio: &str) -> Director {
    Director {
        name: name.to_string(),
        bio: bio.to_string(),
    }
}

fn movie(id: &str, title: &str, description: &str) -> Option<Movie> {
    MovieId::new(id)
        .ok()
        .map(|id| Movie::new(id, title, description))
}

/// A handful of music movies with fixed ids
pub fn demo_movies() -> Vec<Movie> {
    let concert = genre("Concert", "Recorded live performances by a band or artist.");
    let live_set = genre("Live Set", "DJ sets filmed at festivals and unusual venues.");

    [
        movie(
            "pulse",
            "Pulse",
            "Pink Floyd live at Earls Court, London, during the Division Bell tour.",
        )
        .map(|m| {
            m.with_genre(concert.clone())
                .with_director(director(
                    "David Mallet",
                    "British director of music videos and concert films.",
                ))
                .with_actors(vec![
                    "David Gilmour".to_string(),
                    "Nick Mason".to_string(),
                    "Richard Wright".to_string(),
                ])
                .with_image_path("pulse.png")
                .with_featured(true)
        }),
        movie(
            "live-at-pompeii",
            "Live at Pompeii",
            "Pink Floyd perform in the empty amphitheatre of Pompeii.",
        )
        .map(|m| {
            m.with_genre(concert.clone())
                .with_director(director(
                    "Adrian Maben",
                    "Scottish film director known for documentaries on art and music.",
                ))
                .with_actors(vec![
                    "David Gilmour".to_string(),
                    "Roger Waters".to_string(),
                ])
                .with_image_path("pompeii.png")
                .with_featured(true)
        }),
        movie(
            "kiss-the-cloud",
            "Kiss the Cloud",
            "Yello featuring Fifi Rong, recorded at Kraftwerk Berlin in 2016.",
        )
        .map(|m| {
            m.with_genre(concert.clone())
                .with_director(director("Dieter Meier", "Swiss artist and voice of Yello."))
                .with_actors(vec!["Dieter Meier".to_string(), "Boris Blank".to_string()])
        }),
        movie(
            "inspirations-fagradalsfjall",
            "Inspirations",
            "Gardenstate live from the Fagradalsfjall volcano, Iceland.",
        )
        .map(|m| {
            m.with_genre(live_set.clone())
                .with_director(director("Gardenstate", "Dutch electronic music duo."))
        }),
        movie(
            "dj-set-natural-bridge",
            "DJ Set at Natural Bridge",
            "Marsh live from Natural Bridge State Park, Kentucky.",
        )
        .map(|m| {
            m.with_genre(live_set.clone())
                .with_director(director("Marsh", "British DJ and producer."))
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}
