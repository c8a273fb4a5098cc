//! Example of using the tokenizer API

use subtok_core::{
    Annotation, CharRanges, Config, DepthPolicy, Input, SubtokenMetadata, Tokenizer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Default configuration (Latin = 0, Cyrillic = 1)
    println!("=== Example 1: Simple Usage ===");
    let tokenizer = Tokenizer::new();
    let text = "hello123 привет.мир";
    let output = tokenizer.process(Input::from_text(text))?;

    println!("Input text: {}", text);
    println!("Found {} subtokens", output.metadata.subtoken_count);
    for (subtoken, metadata) in &output.subtokens {
        if let SubtokenMetadata::Language { language, base } = metadata {
            println!("  {subtoken:<12} language {language:?}, base {}..{}", base.start, base.end);
        }
    }

    // Example 2: Depth annotation with a fixed window
    println!("\n=== Example 2: Depth Annotation ===");
    let config = Config::builder()
        .script("Latin")?
        .depth_policy(DepthPolicy::fixed(2)?)
        .annotation(Annotation::Depth)
        .build()?;
    let tokenizer = Tokenizer::with_config(config);
    for (subtoken, metadata) in tokenizer.tokenize("a.b.c") {
        println!("  {subtoken:<6} depth {:?}", metadata.depth());
    }

    // Example 3: Custom script table
    println!("\n=== Example 3: Custom Script ===");
    let config = Config::builder()
        .register(CharRanges::new("hex-letters", &[(0x61, 0x66)])?)
        .build()?;
    let tokenizer = Tokenizer::with_config(config);
    let output = tokenizer.process(Input::from_text("cafe42 zz"))?;
    println!("  Processed {} words in {:?}", output.metadata.word_count, output.metadata.duration);
    for subtoken in output.subtokens.keys() {
        println!("  {subtoken}");
    }

    Ok(())
}
