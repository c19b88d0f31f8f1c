use anyhow::Result;

use obex_core::CountryTable;

pub fn run() -> Result<()> {
    let table = CountryTable::afro();
    for country in table.all() {
        println!("{}\t{}", country.iso3, country.name);
    }
    Ok(())
}
