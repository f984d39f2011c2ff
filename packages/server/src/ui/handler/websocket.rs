//! WebSocket connection handlers: the connection gateway.
//!
//! Each accepted connection gets a server-assigned identity and an
//! unbounded outbound queue. Inbound frames are dispatched to the use case
//! layer one at a time, in arrival order; outbound delivery runs in a
//! separate writer task per connection so one slow peer never stalls the
//! rest of a room.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::{
    domain::{ChatPayload, ClientIdentity, ConnectionId, MessagePusher, RoomId},
    infrastructure::dto::{
        conversion::join_replies,
        websocket::{ClientEvent, ServerEvent},
    },
    ui::state::AppState,
};

/// Query parameters for the WebSocket connection.
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    /// Optional display name, resolved through the authenticator.
    pub name: Option<String>,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    // Connection identity is assigned here, never taken from the client.
    let conn_id = ConnectionId::generate();

    let identity = match state
        .authenticator
        .authenticate(&conn_id, query.name.as_deref())
        .await
    {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!("Rejecting connection '{}': {}", conn_id, e);
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    tracing::info!(
        "Connection '{}' accepted as '{}'",
        conn_id,
        identity.display_name
    );

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, conn_id, identity)))
}

/// Spawns a task that drains the connection's queue into the WebSocket
/// sink. This is the only place that writes to the socket after accept.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    conn_id: ConnectionId,
    identity: ClientIdentity,
) {
    let (sender, mut receiver) = socket.split();

    // Register the outbound queue before any event can be processed, so a
    // join reply always has somewhere to go.
    let (tx, rx) = mpsc::unbounded_channel();
    state.pusher.register_connection(conn_id.clone(), tx).await;

    let conn_id_recv = conn_id.clone();
    let state_recv = state.clone();

    // Inbound events, processed sequentially in arrival order.
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", conn_id_recv, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            // Malformed frames are discarded without a reply.
                            tracing::warn!(
                                "Discarding malformed frame from '{}': {}",
                                conn_id_recv,
                                e
                            );
                            continue;
                        }
                    };
                    handle_event(&state_recv, &conn_id_recv, event).await;
                }
                Message::Ping(_) => {
                    // Ping/pong is handled by the protocol layer.
                    tracing::debug!("Received ping from '{}'", conn_id_recv);
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", conn_id_recv);
                    break;
                }
                _ => {}
            }
        }
    });

    // Outbound delivery.
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other.
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.disconnect_usecase.execute(&conn_id).await;
    tracing::info!(
        "Connection '{}' ('{}') disconnected",
        conn_id,
        identity.display_name
    );
}

/// Dispatch one inbound event to its use case.
async fn handle_event(state: &Arc<AppState>, conn_id: &ConnectionId, event: ClientEvent) {
    match event {
        ClientEvent::JoinRoom { room } => {
            let room_id = RoomId::new(room);
            let outcome = state
                .join_room_usecase
                .execute(conn_id.clone(), room_id.clone())
                .await;
            tracing::info!(
                "Connection '{}' joined room '{}' ({} prior members)",
                conn_id,
                room_id,
                outcome.prior_members
            );

            let messages = join_replies(&room_id, &outcome)
                .iter()
                .map(|reply| serde_json::to_string(reply).unwrap())
                .collect();
            state
                .join_room_usecase
                .deliver_replies(conn_id, messages)
                .await;
        }
        ClientEvent::EditorUpdate { room, value } => {
            let reply = ServerEvent::EditorUpdateReturn {
                room: room.clone(),
                value: value.clone(),
            };
            let json = serde_json::to_string(&reply).unwrap();
            if let Err(e) = state
                .update_editor_usecase
                .execute(conn_id, RoomId::new(room), value, json)
                .await
            {
                tracing::warn!("Failed to fan out editor update from '{}': {}", conn_id, e);
            }
        }
        ClientEvent::LanguageUpdate { room, language } => {
            let reply = ServerEvent::LanguageUpdateReturn {
                room: room.clone(),
                language: language.clone(),
            };
            let json = serde_json::to_string(&reply).unwrap();
            if let Err(e) = state
                .update_language_usecase
                .execute(conn_id, RoomId::new(room), language, json)
                .await
            {
                tracing::warn!(
                    "Failed to fan out language update from '{}': {}",
                    conn_id,
                    e
                );
            }
        }
        ClientEvent::ChatMessage { room, message } => {
            let reply = ServerEvent::ChatMessageReturn {
                room: room.clone(),
                message: message.clone(),
            };
            let json = serde_json::to_string(&reply).unwrap();
            if let Err(e) = state
                .send_chat_message_usecase
                .execute(RoomId::new(room), ChatPayload::new(message), json)
                .await
            {
                tracing::warn!("Failed to fan out chat message from '{}': {}", conn_id, e);
            }
        }
    }
}
