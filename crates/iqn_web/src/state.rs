use iqn_sources::Aggregator;

pub struct AppState {
    pub aggregator: Aggregator,
}
