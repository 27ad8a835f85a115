use block_mover::{BlockMover, Color, MoverConfig};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three nodes, a darker background and a faster tick using the bon-generated builder
    let config = MoverConfig::builder()
        .title("Block Mover - custom palette")
        .palette(vec![
            Color::from_hex(0x673AB7),
            Color::from_hex(0x00BCD4),
            Color::from_hex(0xCDDC39),
        ])
        .background(Color::from_hex(0x212121))
        .window_width(300)
        .window_height(300)
        .delay(Duration::from_millis(10))
        .build();

    println!("Click or tap the window to move the block to the next node.");
    println!("Press Ctrl+C or close the window to exit");

    BlockMover::new(config)?.show()?;
    Ok(())
}
