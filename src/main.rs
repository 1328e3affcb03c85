fn main() -> anyhow::Result<()> {
    note_search::run()
}
