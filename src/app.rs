use crate::config::Action;
use crate::handlers::TapHandler;
use crate::ui::{render_alert, render_display};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{error, warn};

/// One line of input is one press of the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Click(String),
    Balance,
}

pub fn parse_activation(action: Action, line: &str) -> Activation {
    match action {
        Action::Tap if line.trim() == "balance" => Activation::Balance,
        _ => Activation::Click(line.to_string()),
    }
}

/// Feeds every input line to its own handler task and prints the display
/// each time a click resolves. Clicks are not serialized: whichever response
/// lands last owns the display. Returns once input is exhausted (or fails)
/// and every in-flight click has rendered.
pub async fn run<R, W>(handler: TapHandler, input: R, output: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let output = Arc::new(Mutex::new(output));
    let mut segments = input.split(b'\n');
    let mut in_flight = JoinSet::new();

    let outcome = loop {
        let segment = match segments.next_segment().await {
            Ok(Some(segment)) => segment,
            Ok(None) => break Ok(()),
            Err(err) => break Err(err),
        };
        let Some(line) = decode_line(segment) else {
            warn!("skipping input line that is not valid UTF-8");
            continue;
        };

        let activation = parse_activation(handler.action(), &line);
        let handler = handler.clone();
        let output = Arc::clone(&output);

        in_flight.spawn(async move {
            match activation {
                Activation::Click(field) => {
                    let _ = handler.click(&field).await;
                }
                Activation::Balance => {
                    let _ = handler.refresh_balance().await;
                }
            }
            render(&handler, &output).await
        });

        while let Some(joined) = in_flight.try_join_next() {
            report(joined);
        }
    };

    while let Some(joined) = in_flight.join_next().await {
        report(joined);
    }

    outcome
}

fn decode_line(mut segment: Vec<u8>) -> Option<String> {
    if segment.last() == Some(&b'\r') {
        segment.pop();
    }
    String::from_utf8(segment).ok()
}

async fn render<W>(handler: &TapHandler, output: &Mutex<W>) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut out = output.lock().await;
    let frame = {
        let mut display = handler.state().display.lock().await;
        let mut frame = String::new();
        if let Some(alert) = display.take_alert() {
            frame.push_str(&render_alert(&alert));
            frame.push('\n');
        }
        frame.push_str(&render_display(handler.action(), &display));
        frame.push_str("\n\n");
        frame
    };

    out.write_all(frame.as_bytes()).await?;
    out.flush().await
}

fn report(joined: Result<io::Result<()>, tokio::task::JoinError>) {
    match joined {
        Ok(Ok(())) => {}
        Ok(Err(err)) => error!("failed to render display: {err}"),
        Err(err) => error!("click task failed: {err}"),
    }
}
