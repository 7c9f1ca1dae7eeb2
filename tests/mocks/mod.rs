pub mod mock_cards_client;

pub use mock_cards_client::MockCardsClient;
