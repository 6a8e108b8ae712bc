use std::sync::Arc;

use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use cardkeep::config::Config;
use cardkeep::images::ImageStore;
use cardkeep::models::{CardType, NewCard, Rarity};
use cardkeep::routes::{self, AppState};
use cardkeep::store::{CardStore, MemoryStore, MongoStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let store: Arc<dyn CardStore> = match &config.mongodb_uri {
        Some(uri) => {
            tracing::info!("using MongoDB card store");
            Arc::new(
                MongoStore::connect(uri)
                    .await
                    .expect("Failed to connect to MongoDB"),
            )
        }
        None => {
            tracing::info!("using in-memory card store with demo seed data");
            let store = MemoryStore::new();
            seed(&store).await;
            Arc::new(store)
        }
    };

    let images =
        ImageStore::new(&config.image_root).expect("Failed to create image storage root");

    let state = Arc::new(AppState { store, images });
    let app = routes::router(state)
        .nest_service("/images", ServeDir::new(&config.image_root));

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server port");
    axum::serve(listener, app).await.expect("Server error");
}

/// Demo cards the in-memory backing starts with.
async fn seed(store: &MemoryStore) {
    let cards = [
        NewCard {
            name: "Crimson Knight".to_string(),
            card_type: CardType::Creature,
            rarity: Rarity::Epic,
            description: "A warrior fueled by bloodlust, the Crimson Knight grows stronger \
                          with each victory in battle."
                .to_string(),
            attack: 200,
            defense: 180,
            abilities: vec![
                "Blood Frenzy: Gains +10 attack every time it destroys a creature.".to_string(),
                "Crimson Shield: Reduces damage from melee attacks by 25%.".to_string(),
            ],
            img_name: "images/crimson-knight.jpeg".to_string(),
        },
        NewCard {
            name: "Void Walker".to_string(),
            card_type: CardType::Creature,
            rarity: Rarity::Epic,
            description: "A mysterious entity from another dimension, the Void Walker uses \
                          teleportation and soul manipulation to outwit its foes."
                .to_string(),
            attack: 170,
            defense: 150,
            abilities: vec![
                "Void Shift: Can teleport out of combat, avoiding one attack per game.".to_string(),
                "Soul Drain: Drains 30 health from an enemy creature, healing Void Walker by \
                 the same amount."
                    .to_string(),
            ],
            img_name: "images/void-walker.jpeg".to_string(),
        },
        NewCard {
            name: "Ice Queen".to_string(),
            card_type: CardType::Creature,
            rarity: Rarity::Legendary,
            description: "Ruling over the frozen tundra, the Ice Queen commands icy winds and \
                          frost to freeze her enemies in their tracks."
                .to_string(),
            attack: 160,
            defense: 220,
            abilities: vec![
                "Frozen Touch: Freezes an enemy creature, preventing it from attacking for one \
                 turn."
                    .to_string(),
                "Blizzard Call: Deals 40 damage to all enemies and reduces their attack by 10 \
                 for two turns."
                    .to_string(),
            ],
            img_name: "images/ice-queen.jpeg".to_string(),
        },
        NewCard {
            name: "Phoenix Guardian".to_string(),
            card_type: CardType::Creature,
            rarity: Rarity::Legendary,
            description: "A celestial guardian, the Phoenix Guardian harnesses the power of \
                          fire to protect its allies."
                .to_string(),
            attack: 190,
            defense: 170,
            abilities: vec![
                "Rebirth: Once per game, resurrects after being destroyed with half health."
                    .to_string(),
                "Flame Wings: Deals 50 damage to an enemy and burns them for 10 damage over \
                 time."
                    .to_string(),
            ],
            img_name: "images/phoenix.jpeg".to_string(),
        },
    ];

    for card in cards {
        if let Err(e) = store.insert(card).await {
            tracing::warn!("failed to seed demo card: {e}");
        }
    }
}
