/// Format whole seconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped, so very long playlists render as e.g. `123:00:00`.
pub fn hms(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;
    format!("{hours:02}:{mins:02}:{secs:02}")
}
