use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    icongen::icon::generate()
}
