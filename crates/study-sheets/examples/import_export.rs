//! Example: Turn a vocabulary CSV into records and back again

use study_sheets::prelude::*;

fn main() -> Result<()> {
    let lines = [
        "Japanese,Romaji,English,Group,Sub Group,Pronounce,Tags",
        "\"アイツに「おそい」ってよばれた",
        "アイツに「遅い」って呼ばれた\",aitsu ni osoi tte yobareta,\"That guy called me \"\"slow\"\"\",,,,",
        "ねこ,neko,cat,Animal,,,",
    ];

    // Parse the lines into a sheet
    let sheet = CsvReader::read_lines(lines, "Vocabulary", &CsvReadOptions::default())?;
    println!("Parsed {} rows from '{}'", sheet.len(), sheet.name());

    // Convert to keyed records
    let records = sheet.to_records()?;
    println!("{} records, fingerprint {}", records.len(), records.hash());
    println!("{}", records.to_json()?);

    // And back out as CSV
    for line in CsvWriter::to_lines(&records.to_sheet(), &CsvWriteOptions::default()) {
        println!("{line}");
    }

    Ok(())
}
