use anyhow::Result;

fn main() -> Result<()> {
    outcome_grid::cli::run()
}
