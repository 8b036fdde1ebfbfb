use std::future::Future;
use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

use crate::catalog::CatalogService;
use super::handle_packet;

/// Serves newline-delimited packets from `reader`, one reply line per packet.
///
/// Stops at end of input or when `shutdown` resolves, whichever comes first,
/// and returns the number of packets handled.
#[instrument(name = "rpc_transport", skip_all)]
pub async fn serve<R, W>(
    service: CatalogService,
    reader: R,
    mut writer: W,
    shutdown: impl Future<Output = ()>,
) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Listening for packets");
    let mut lines = reader.lines();
    tokio::pin!(shutdown);
    let mut handled = 0;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            () = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }
        };
        let Some(line) = line else {
            debug!("Input closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_packet(&service, &line).await;
        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        handled += 1;
    }

    info!(handled, "Transport stopped");
    Ok(handled)
}
