use animefire_core::AnimeFireScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = AnimeFireScraper::new()?;

    println!("🔥 Animes em alta...\n");

    let animes = scraper.popular(1).await?;
    println!("Encontrados {} animes:", animes.len());
    for (i, anime) in animes.iter().take(10).enumerate() {
        println!("  {}. {}", i + 1, anime.title);
    }

    if let Some(anime) = animes.first() {
        println!("\n📺 Detalhes de: {}\n", anime.title);

        let detail = scraper.details(&anime.url).await?;
        println!("Título: {}", detail.title);
        if !detail.synopsis.is_empty() {
            println!("Sinopse: {}", detail.synopsis);
        }
        if !detail.genres.is_empty() {
            println!("Gêneros: {}", detail.genres.join(", "));
        }
        for (label, value) in &detail.info {
            println!("{}: {}", label, value);
        }

        let page = scraper.episodes(&anime.url, 1).await?;
        println!(
            "\n🎬 {} episódios em {} lotes; primeiro lote:",
            page.total_episodes, page.total_batches
        );
        for ep in &page.items {
            println!("  {:>3}. {}", ep.number, ep.title);
        }

        if let Some(ep) = page.items.first() {
            let sources = scraper.video(&ep.url).await?;
            println!("\n▶ Fontes de vídeo de '{}':", ep.title);
            if sources.is_empty() {
                println!("  (nenhuma fonte encontrada)");
            }
            for source in &sources {
                println!("  [{}] {}", source.quality, source.url);
            }
        }
    }

    Ok(())
}
