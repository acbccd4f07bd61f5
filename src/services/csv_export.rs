use std::io::Write;

const CSV_HEADER: &str = "twitch_username";

/// Header row, then one username per row, UTF-8.
pub fn write_usernames_csv<W: Write>(writer: W, usernames: &[String]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record([CSV_HEADER])?;
    for username in usernames {
        writer.write_record([username.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}

/// The CSV rendered in memory, for serving as a download.
pub fn usernames_csv_bytes(usernames: &[String]) -> Result<Vec<u8>, csv::Error> {
    let mut buffer = Vec::new();
    write_usernames_csv(&mut buffer, usernames)?;
    Ok(buffer)
}

/// Download filename encoding the requested range and language filter.
pub fn csv_filename(start: u32, end: u32, language: Option<&str>) -> String {
    match language {
        Some(language) => format!("twitch_usernames_{start}_{end}_{language}.csv"),
        None => format!("twitch_usernames_{start}_{end}.csv"),
    }
}
