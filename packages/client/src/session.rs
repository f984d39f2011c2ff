//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use bansho_server::infrastructure::dto::websocket::{ClientEvent, ServerEvent};
use bansho_shared::time::now_utc_millis;

use crate::{
    command::{InputCommand, parse_input},
    error::ClientError,
    formatter::MessageFormatter,
    ui::redisplay_prompt,
};

/// Run the interactive client session: join `room` and relay input until
/// the connection or the user ends it.
pub async fn run_client_session(
    url: &str,
    room: &str,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // The display name travels as a query parameter; the server assigns the
    // actual connection identity itself.
    let url = format!("{}?name={}", url, name);

    let (ws_stream, _response) = connect_async(&url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to room server");
    println!(
        "\nYou are '{}' in room '{}'.\n\
         Type to chat, '/code <text>' to replace the shared code buffer,\n\
         '/lang <id>' to switch language. Press Ctrl+C to exit.\n",
        name, room
    );

    let (mut write, mut read) = ws_stream.split();

    // Joining is the first thing that happens on the wire.
    let join = ClientEvent::JoinRoom {
        room: room.to_string(),
    };
    write
        .send(Message::Text(serde_json::to_string(&join)?.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    // Incoming events.
    let name_for_read = name.to_string();
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    match serde_json::from_str::<ServerEvent>(&text) {
                        Ok(event) => {
                            print!("{}", MessageFormatter::format_event(&event));
                        }
                        Err(_) => {
                            print!("{}", MessageFormatter::format_raw_message(&text));
                        }
                    }
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // Blocking thread for rustyline (synchronous readline).
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();
    let prompt_name = name.to_string();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let prompt = format!("{}> ", prompt_name);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Outgoing events.
    let room_for_write = room.to_string();
    let name_for_write = name.to_string();
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            let Some(command) = parse_input(&line) else {
                continue;
            };

            let event = match command {
                InputCommand::Code(value) => ClientEvent::EditorUpdate {
                    room: room_for_write.clone(),
                    value,
                },
                InputCommand::Language(language) => ClientEvent::LanguageUpdate {
                    room: room_for_write.clone(),
                    language,
                },
                InputCommand::Chat(text) => ClientEvent::ChatMessage {
                    room: room_for_write.clone(),
                    message: serde_json::json!({
                        "user": name_for_write,
                        "text": text,
                        "timestamp": now_utc_millis(),
                    }),
                },
            };

            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize event: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send event: {}", e);
                write_error = true;
                break;
            }
        }

        write_error
    });

    // If any one of the tasks completes, abort the other.
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            if read_result.unwrap_or(false) {
                return Err(Box::new(ClientError::ConnectionError(
                    "Connection lost".to_string(),
                )));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            if write_result.unwrap_or(false) {
                return Err(Box::new(ClientError::ConnectionError(
                    "Connection lost".to_string(),
                )));
            }
        }
    }

    Ok(())
}
