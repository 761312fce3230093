//! HTTP server for the framepay API.
//!
//! Holds the shared application state and the router wiring; request
//! semantics live in the `apis` modules.

use alloy_primitives::Address;
use axum::{
	routing::{get, post},
	Router,
};
use framepay_chain::{ChainVerifier, EligibilityChecker};
use framepay_config::Config;
use framepay_frames::{FrameImages, FrameRoutes};
use framepay_identity::{ActionAuthenticator, NeynarAuthenticator};
use framepay_leaderboard::Leaderboard;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::apis;

/// Shared application state for the API server.
#[derive(Clone)]
pub struct AppState {
	/// Complete configuration.
	pub config: Arc<Config>,
	/// Parsed stablecoin contract address.
	pub usdc: Address,
	/// Parsed payout wallet address.
	pub payout: Address,
	/// Parsed claim contract address, when the claim flow is configured.
	pub claim_contract: Option<Address>,
	/// Frame-action authenticator.
	pub authenticator: Arc<dyn ActionAuthenticator>,
	/// Receipt verifier for the supported chain.
	pub verifier: Arc<ChainVerifier>,
	/// Claim eligibility checker, when the claim flow is configured.
	pub eligibility: Option<Arc<EligibilityChecker>>,
	/// In-memory leaderboard store.
	pub leaderboard: Arc<Leaderboard>,
}

impl AppState {
	/// Builds the full application state from a validated configuration.
	pub fn from_config(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
		config.validate()?;

		let usdc: Address = config.chain.usdc_address.parse()?;
		let payout: Address = config.payment.payout_address.parse()?;

		let authenticator = NeynarAuthenticator::new(
			config.identity.api_url.clone(),
			config.identity.api_key.clone(),
			config.identity.timeout_seconds,
		)?;
		let verifier = ChainVerifier::new(&config.chain.rpc_url, config.chain.timeout_seconds)?;

		let mut claim_contract = None;
		let mut eligibility = None;
		if let Some(claim) = &config.claim {
			let contract: Address = claim.contract_address.parse()?;
			claim_contract = Some(contract);
			eligibility = Some(Arc::new(EligibilityChecker::new(
				&config.chain.rpc_url,
				contract,
				config.chain.timeout_seconds,
			)?));
		}

		Ok(Self {
			config: Arc::new(config),
			usdc,
			payout,
			claim_contract,
			authenticator: Arc::new(authenticator),
			verifier: Arc::new(verifier),
			eligibility,
			leaderboard: Arc::new(Leaderboard::new()),
		})
	}

	/// Public URLs used by the state selector.
	pub fn routes(&self) -> FrameRoutes {
		FrameRoutes {
			public_url: self.config.frames.public_url.clone(),
			game_url: self.config.frames.game_url.clone(),
		}
	}

	/// Imagery used when rendering next states.
	pub fn images(&self) -> FrameImages {
		let frames = &self.config.frames;
		FrameImages {
			success: frames.success_image_url.clone(),
			failed: frames.failed_image_url.clone(),
			claim_success: frames.claim_success_image().to_string(),
			claim_failed: frames.claim_failed_image().to_string(),
		}
	}
}

/// Builds the router with all frame, transaction, and leaderboard routes.
pub fn build_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(apis::pages::index))
		.route(
			"/pay/frame",
			get(apis::pages::payment_frame_page).post(apis::pay::frame_action),
		)
		.route("/pay/transaction", post(apis::pay::transaction))
		.route("/pay/verify", post(apis::pay::verify))
		.route(
			"/claim/frame",
			get(apis::pages::claim_frame_page).post(apis::claim::frame_action),
		)
		.route(
			"/claim/check-eligibility",
			post(apis::claim::check_eligibility),
		)
		.route("/claim/transaction", post(apis::claim::transaction))
		.route("/claim/verify", post(apis::claim::verify))
		.route("/leaderboard", get(apis::leaderboard::top))
		.route("/leaderboard/submit", post(apis::leaderboard::submit))
		.layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
		.with_state(state)
}

/// Starts the HTTP server and serves until shutdown.
pub async fn start_server(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
	let bind_address = format!("{}:{}", state.config.server.host, state.config.server.port);
	let app = build_router(state);

	let listener = TcpListener::bind(&bind_address).await?;
	tracing::info!("framepay API server starting on {}", bind_address);

	axum::serve(listener, app).await?;

	Ok(())
}
