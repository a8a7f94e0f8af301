use axum_shop_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::products::CreateProductRequest,
    dto::qa::CreateQaRequest,
    dto::reviews::CreateReviewRequest,
    entity::{Products, products},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let seeded = seed_catalog(&orm).await?;
    println!("Seed completed. {seeded} products inserted.");
    Ok(())
}

/// Insert the sample catalog, skipping products that already exist so the
/// seed can be re-run.
async fn seed_catalog(orm: &DatabaseConnection) -> anyhow::Result<usize> {
    let mut seeded = 0;
    for sample in sample_products() {
        let exists = Products::find()
            .filter(products::Column::ProductName.eq(sample.product_name.clone()))
            .one(orm)
            .await?;
        if exists.is_some() {
            continue;
        }

        let product = sample.into_active_model().insert(orm).await?;
        seed_review_and_qa(orm, product.id).await?;
        seeded += 1;
        println!("Seeded product {} ({})", product.product_name, product.id);
    }
    Ok(seeded)
}

fn sample_products() -> Vec<CreateProductRequest> {
    vec![
        CreateProductRequest {
            brand_name: "나이키".to_string(),
            product_name: "에어맥스 97".to_string(),
            image_url: "https://cdn.example.com/products/airmax-97.jpg".to_string(),
            price: 189_000,
            discount: 10,
            category: "운동화".to_string(),
        },
        CreateProductRequest {
            brand_name: "아디다스".to_string(),
            product_name: "삼바 OG".to_string(),
            image_url: "https://cdn.example.com/products/samba-og.jpg".to_string(),
            price: 139_000,
            discount: 0,
            category: "운동화".to_string(),
        },
        CreateProductRequest {
            brand_name: "리바이스".to_string(),
            product_name: "501 오리지널 청바지".to_string(),
            image_url: "https://cdn.example.com/products/levis-501.jpg".to_string(),
            price: 109_000,
            discount: 15,
            category: "바지".to_string(),
        },
        CreateProductRequest {
            brand_name: "무신사 스탠다드".to_string(),
            product_name: "베이직 반팔티".to_string(),
            image_url: "https://cdn.example.com/products/basic-tee.jpg".to_string(),
            price: 19_900,
            discount: 5,
            category: "상의".to_string(),
        },
        CreateProductRequest {
            brand_name: "카시오".to_string(),
            product_name: "G-SHOCK DW-5600".to_string(),
            image_url: "https://cdn.example.com/products/gshock.jpg".to_string(),
            price: 89_000,
            discount: 20,
            category: "시계".to_string(),
        },
    ]
}

async fn seed_review_and_qa(orm: &DatabaseConnection, product_id: i64) -> anyhow::Result<()> {
    CreateReviewRequest {
        product_id,
        user_name: "지민".to_string(),
        rating: 5,
        content: "배송도 빠르고 품질이 좋아요".to_string(),
    }
    .into_active_model()
    .insert(orm)
    .await?;

    CreateQaRequest {
        product_id,
        question: "사이즈가 정사이즈인가요?".to_string(),
        answer: "네, 정사이즈로 나왔습니다.".to_string(),
        user_name: "수진".to_string(),
    }
    .into_active_model()
    .insert(orm)
    .await?;

    Ok(())
}
