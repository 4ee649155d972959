use phar::{decode, encode, Archive, CompressionKind, Entry};
use tracing::{debug, subscriber::set_global_default, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> phar::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_file(false)
        .with_line_number(true)
        .finish();

    #[allow(clippy::expect_used)]
    set_global_default(subscriber).expect("setting default subscriber failed");

    let mut archive = Archive::default();
    archive.set_alias("demo.phar");
    let mut readme = Entry::new("readme.txt", "hello from the demo archive\n");
    readme.set_compression(CompressionKind::Gz)?;
    archive.add_file(readme);

    let bytes = encode(&archive)?;
    debug!(bytes = bytes.len(), "encoded archive");

    let decoded = decode(&bytes)?;
    for entry in decoded.get_files() {
        debug!(
            name = %String::from_utf8_lossy(entry.name()),
            size = entry.size(),
            compression = ?entry.compression(),
            "decoded entry"
        );
    }

    Ok(())
}
