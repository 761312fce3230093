//! Canonical frame templates.
//!
//! One definition per named frame. Every template is a complete HTML
//! document carrying the `fc:frame` meta tags the frame protocol renders
//! from; bodies stay minimal.

use crate::{Flow, NextState};

/// Imagery used when rendering next states.
#[derive(Debug, Clone)]
pub struct FrameImages {
	/// Shown after a verified payment.
	pub success: String,
	/// Shown on the payment retry frame.
	pub failed: String,
	/// Shown after a verified claim.
	pub claim_success: String,
	/// Shown on the claim retry frame.
	pub claim_failed: String,
}

/// Renders the selected next state as a frame document.
pub fn render_next_state(state: &NextState, images: &FrameImages) -> String {
	match state {
		NextState::Unlocked { target_url } => {
			redirect_frame(&images.success, "Launch Game", target_url)
		}
		NextState::ClaimSucceeded { target_url } => {
			redirect_frame(&images.claim_success, "Play Again", target_url)
		}
		NextState::RetryPrompt { flow, post_url } => match flow {
			Flow::Payment => retry_frame(&images.failed, "Retry Payment", post_url),
			Flow::Claim => retry_frame(&images.claim_failed, "Retry Claim", post_url),
		},
	}
}

/// Frame with a single link-out button.
pub fn redirect_frame(image_url: &str, button_label: &str, target_url: &str) -> String {
	format!(
		r#"<!DOCTYPE html>
<html>
<head>
    <meta property="fc:frame" content="vNext" />
    <meta property="fc:frame:image" content="{image_url}" />
    <meta property="fc:frame:image:aspect_ratio" content="1:1" />
    <meta property="og:image" content="{image_url}" />
    <meta property="fc:frame:button:1" content="{button_label}" />
    <meta property="fc:frame:button:1:action" content="link" />
    <meta property="fc:frame:button:1:target" content="{target_url}" />
</head>
<body></body>
</html>"#
	)
}

/// Frame with a single post button re-entering the flow.
pub fn retry_frame(image_url: &str, button_label: &str, post_url: &str) -> String {
	format!(
		r#"<!DOCTYPE html>
<html>
<head>
    <meta property="fc:frame" content="vNext" />
    <meta property="fc:frame:image" content="{image_url}" />
    <meta property="fc:frame:image:aspect_ratio" content="1:1" />
    <meta property="og:image" content="{image_url}" />
    <meta property="fc:frame:button:1" content="{button_label}" />
    <meta property="fc:frame:button:1:action" content="post" />
    <meta property="fc:frame:post_url" content="{post_url}" />
</head>
<body></body>
</html>"#
	)
}

/// Payment entry frame with a transaction button.
pub fn payment_frame(image_url: &str, public_url: &str, button_label: &str) -> String {
	transaction_frame(
		image_url,
		button_label,
		&format!("{}/pay/transaction", public_url),
		&format!("{}/pay/verify", public_url),
		"Payment Frame",
	)
}

/// Claim entry frame with a transaction button.
pub fn claim_frame(image_url: &str, public_url: &str, button_label: &str) -> String {
	transaction_frame(
		image_url,
		button_label,
		&format!("{}/claim/transaction", public_url),
		&format!("{}/claim/verify", public_url),
		"Claim Your Reward",
	)
}

/// Frame with a transaction button and a verification post-back.
fn transaction_frame(
	image_url: &str,
	button_label: &str,
	tx_target: &str,
	post_url: &str,
	title: &str,
) -> String {
	format!(
		r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <meta property="fc:frame" content="vNext" />
    <meta property="fc:frame:image" content="{image_url}" />
    <meta property="fc:frame:image:aspect_ratio" content="1:1" />
    <meta property="og:image" content="{image_url}" />
    <meta property="fc:frame:button:1" content="{button_label}" />
    <meta property="fc:frame:button:1:action" content="tx" />
    <meta property="fc:frame:button:1:target" content="{tx_target}" />
    <meta property="fc:frame:post_url" content="{post_url}" />
</head>
<body></body>
</html>"#
	)
}

/// Cooldown frame shown when the actor's claim window has not elapsed.
pub fn claim_cooldown_frame(image_url: &str, home_url: &str, wait: &str) -> String {
	format!(
		r#"<!DOCTYPE html>
<html>
<head>
    <meta property="fc:frame" content="vNext" />
    <meta property="fc:frame:image" content="{image_url}" />
    <meta property="fc:frame:image:aspect_ratio" content="1:1" />
    <meta property="og:image" content="{image_url}" />
    <meta property="fc:frame:button:1" content="Play Again" />
    <meta property="fc:frame:button:1:action" content="link" />
    <meta property="fc:frame:button:1:target" content="{home_url}" />
</head>
<body>
  <p>You must wait {wait} before claiming again.</p>
</body>
</html>"#
	)
}

/// Mini-app embed entry page.
///
/// Carries the serialized embed document in both the `fc:miniapp` and the
/// legacy `fc:frame` meta tags.
pub fn embed_page(image_url: &str, public_url: &str, button_title: &str) -> String {
	let embed = serde_json::json!({
		"version": "1",
		"imageUrl": image_url,
		"button": {
			"title": button_title,
			"action": {
				"type": "launch_frame",
				"name": "Payment Frame",
				"url": format!("{}/pay/frame", public_url),
				"splashImageUrl": image_url,
				"splashBackgroundColor": "#1a1a1a",
			},
		},
	});
	let serialized = embed.to_string();

	format!(
		r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Payment Frame</title>
  <meta property="fc:miniapp" content='{serialized}' />
  <meta property="fc:frame" content='{serialized}' />
  <meta property="og:title" content="Payment Frame" />
  <meta property="og:description" content="Pay to play the game" />
  <meta property="og:image" content="{image_url}" />
</head>
<body>
  <div style="display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100vh; font-family: sans-serif; background: #1a1a1a; color: white;">
    <h1>Payment Required</h1>
    <p>Click the button below to pay and start playing!</p>
  </div>
</body>
</html>"#
	)
}
