//! Catalog seeding command.
//!
//! Inserts the demo categories and products used during development.
//! Idempotent: existing slugs are left untouched.

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{CommandError, connect};

struct SeedCategory {
    name: &'static str,
    slug: &'static str,
    image_url: &'static str,
}

struct SeedProduct {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    /// Price in centavos.
    price_minor: i64,
    image_url: &'static str,
    category_slug: &'static str,
    stock: i32,
}

const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Roupas de Bebê",
        slug: "roupas-de-bebe",
        image_url: "https://images.pexels.com/photos/1029243/pexels-photo-1029243.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    SeedCategory {
        name: "Brinquedos",
        slug: "brinquedos",
        image_url: "https://images.pexels.com/photos/207891/pexels-photo-207891.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    SeedCategory {
        name: "Acessórios",
        slug: "acessorios",
        image_url: "https://images.pexels.com/photos/1620760/pexels-photo-1620760.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    SeedCategory {
        name: "Calçados",
        slug: "calcados",
        image_url: "https://images.pexels.com/photos/1029243/pexels-photo-1029243.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Body de Algodão Orgânico",
        slug: "body-algodao-organico",
        description: "Body macio e confortável para bebês, feito de algodão orgânico.",
        price_minor: 4990,
        image_url: "https://images.pexels.com/photos/1029243/pexels-photo-1029243.jpeg?auto=compress&cs=tinysrgb&w=400",
        category_slug: "roupas-de-bebe",
        stock: 100,
    },
    SeedProduct {
        name: "Chocalho de Madeira",
        slug: "chocalho-madeira",
        description: "Chocalho ecológico de madeira, seguro para o bebê.",
        price_minor: 2950,
        image_url: "https://images.pexels.com/photos/207891/pexels-photo-207891.jpeg?auto=compress&cs=tinysrgb&w=400",
        category_slug: "brinquedos",
        stock: 50,
    },
    SeedProduct {
        name: "Vestido Floral Verão",
        slug: "vestido-floral-verao",
        description: "Vestido leve e fresco com estampa floral, perfeito para os dias quentes.",
        price_minor: 8990,
        image_url: "https://images.pexels.com/photos/1620760/pexels-photo-1620760.jpeg?auto=compress&cs=tinysrgb&w=400",
        category_slug: "roupas-de-bebe",
        stock: 30,
    },
    SeedProduct {
        name: "Sapatinho de Tricô",
        slug: "sapatinho-trico",
        description: "Sapatinho de tricô feito à mão, super quentinho e delicado.",
        price_minor: 4990,
        image_url: "https://images.pexels.com/photos/1029243/pexels-photo-1029243.jpeg?auto=compress&cs=tinysrgb&w=400",
        category_slug: "calcados",
        stock: 25,
    },
    SeedProduct {
        name: "Kit Faixas de Cabelo",
        slug: "kit-faixas-cabelo",
        description: "Kit com 3 faixas de cabelo em cores variadas.",
        price_minor: 3490,
        image_url: "https://images.pexels.com/photos/1620760/pexels-photo-1620760.jpeg?auto=compress&cs=tinysrgb&w=400",
        category_slug: "acessorios",
        stock: 60,
    },
    SeedProduct {
        name: "Macacão Divertido",
        slug: "macacao-divertido",
        description: "Macacão colorido e divertido para o dia a dia.",
        price_minor: 7990,
        image_url: "https://images.pexels.com/photos/1029243/pexels-photo-1029243.jpeg?auto=compress&cs=tinysrgb&w=400",
        category_slug: "roupas-de-bebe",
        stock: 40,
    },
];

/// Seed the catalog with the demo data set.
///
/// # Errors
///
/// Returns `CommandError` when the database is unreachable or an insert
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    seed_categories(&pool).await?;
    seed_products(&pool).await?;
    tracing::info!(
        "catalog seeded: {} categories, {} products",
        CATEGORIES.len(),
        PRODUCTS.len()
    );

    Ok(())
}

async fn seed_categories(pool: &PgPool) -> Result<(), CommandError> {
    for category in CATEGORIES {
        sqlx::query(
            "INSERT INTO categories (name, slug, image_url) VALUES ($1, $2, $3) \
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(category.name)
        .bind(category.slug)
        .bind(category.image_url)
        .execute(pool)
        .await?;
    }

    Ok(())
}

async fn seed_products(pool: &PgPool) -> Result<(), CommandError> {
    for product in PRODUCTS {
        sqlx::query(
            "INSERT INTO products (name, slug, description, price, image_urls, category_id, stock) \
             SELECT $1, $2, $3, $4, $5, c.id, $6 FROM categories c WHERE c.slug = $7 \
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(product.name)
        .bind(product.slug)
        .bind(product.description)
        .bind(Decimal::new(product.price_minor, 2))
        .bind(vec![product.image_url.to_owned()])
        .bind(product.stock)
        .bind(product.category_slug)
        .execute(pool)
        .await?;
    }

    Ok(())
}
