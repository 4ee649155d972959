use phar::zip_bridge::{to_phar, to_zip};
use phar::{Archive, Entry};
use tracing::{debug, subscriber::set_global_default, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> phar::zip_bridge::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_file(false)
        .with_line_number(true)
        .finish();

    #[allow(clippy::expect_used)]
    set_global_default(subscriber).expect("setting default subscriber failed");

    let mut archive = Archive::default();
    archive.add_file(Entry::new("readme.txt", "bridged via zip\n"));

    let zip_bytes = to_zip(&archive)?;
    debug!(bytes = zip_bytes.len(), "wrote zip container");

    let back = to_phar(&zip_bytes)?;
    for entry in back.get_files() {
        debug!(name = %String::from_utf8_lossy(entry.name()), "round-tripped entry");
    }

    Ok(())
}
