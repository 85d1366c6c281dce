fn main() -> anyhow::Result<()> {
    messenger_analyze::cli::run()
}
