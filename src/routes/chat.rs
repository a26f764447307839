use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
	Json, Router,
};
use serde::Deserialize;

use super::AppState;
use crate::{domain::message::SendMessage, services::response::ServiceError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesQuery {
	sender_email: String,
	receiver_email: String,
}

#[derive(Debug, Deserialize)]
pub struct ConversationQuery {
	user1: String,
	user2: String,
}

async fn get_messages(
	State(state): State<AppState>,
	Query(query): Query<MessagesQuery>,
) -> Result<Response, ServiceError> {
	let messages = state.messaging.get_messages(&query.sender_email, &query.receiver_email).await?;
	if messages.is_empty() {
		return Ok(StatusCode::NO_CONTENT.into_response());
	}
	Ok(Json(messages).into_response())
}

async fn send_message(
	State(state): State<AppState>,
	Json(message): Json<SendMessage>,
) -> Response {
	match state.messaging.send_message(message).await {
		Ok(_) => (StatusCode::CREATED, "Message sent successfully").into_response(),
		Err(err @ ServiceError::ValidationError(_)) => err.into_response(),
		Err(err) => {
			tracing::error!("sending message failed: {:?}", err);
			(StatusCode::INTERNAL_SERVER_ERROR, format!("Error sending message: {}", err)).into_response()
		}
	}
}

async fn get_conversation(
	State(state): State<AppState>,
	Query(query): Query<ConversationQuery>,
) -> Result<Response, ServiceError> {
	if !state.messaging.users_exist(&query.user1, &query.user2).await? {
		tracing::info!(user1 = %query.user1, user2 = %query.user2, "conversation requested for unknown user");
		return Ok(StatusCode::BAD_REQUEST.into_response());
	}

	let conversation = state.messaging.get_conversation(&query.user1, &query.user2).await?;
	Ok(Json(conversation).into_response())
}

pub fn chat_routers() -> Router<AppState> {
	Router::new()
		.route("/messages", get(get_messages))
		.route("/send", post(send_message))
		.route("/conversation", get(get_conversation))
}
