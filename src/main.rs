pub mod modules;
pub use modules::{auth, comment, media, post, topic};
pub mod api;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::{adapter::outgoing::ApiTokenQueryPostgres, application::ports::outgoing::ApiTokenQuery};
use crate::comment::{
    adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres},
    application::{
        comment_use_cases::CommentUseCases,
        services::{
            CommentImages, CommentResolver, CreateCommentService, DeleteCommentService,
            GetCommentService, GetCommentsService, UpdateCommentService,
        },
    },
};
use crate::media::{
    adapter::outgoing::s3::{S3Config, S3ObjectStorage},
    application::{domain::ImagePolicy, ports::outgoing::ObjectStorage},
};
use crate::post::{
    adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres},
    application::{
        post_use_cases::PostUseCases,
        services::{
            CreatePostService, DeletePostService, GetPostService, GetPostsService, PostResolver,
            UpdatePostService,
        },
    },
};
use crate::shared::{
    api::{json_config::custom_json_config, path_config::custom_path_config},
    config::ServerConfig,
};
use crate::topic::{
    adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres},
    application::{
        services::{
            CreateTopicService, DeleteTopicService, GetTopicService, GetTopicsService,
            TopicResolver, UpdateTopicService,
        },
        topic_use_cases::TopicUseCases,
    },
};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
    pub post: PostUseCases,
    pub comment: CommentUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    storage: Arc<dyn ObjectStorage + Send + Sync>,
    image_policy: ImagePolicy,
) -> AppState {
    // Topic
    let topic_query = TopicQueryPostgres::new(Arc::clone(db));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(db));
    let topics = TopicResolver::new(Arc::new(topic_query.clone()));

    let topic = TopicUseCases {
        list: Arc::new(GetTopicsService::new(topic_query.clone())),
        create: Arc::new(CreateTopicService::new(topic_query, topic_repo.clone())),
        get: Arc::new(GetTopicService::new(topics.clone())),
        update: Arc::new(UpdateTopicService::new(topics.clone(), topic_repo.clone())),
        delete: Arc::new(DeleteTopicService::new(topics.clone(), topic_repo)),
    };

    // Post
    let post_query = PostQueryPostgres::new(Arc::clone(db));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(db));
    let posts = PostResolver::new(topics.clone(), Arc::new(post_query.clone()));

    let post = PostUseCases {
        list: Arc::new(GetPostsService::new(topics.clone(), post_query)),
        create: Arc::new(CreatePostService::new(topics, post_repo.clone())),
        get: Arc::new(GetPostService::new(posts.clone())),
        update: Arc::new(UpdatePostService::new(posts.clone(), post_repo.clone())),
        delete: Arc::new(DeletePostService::new(posts.clone(), post_repo)),
    };

    // Comment
    let comment_query = CommentQueryPostgres::new(Arc::clone(db));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(db));
    let comments = CommentResolver::new(posts, Arc::new(comment_query.clone()));
    let max_image_bytes = image_policy.max_file_size_bytes;
    let images = CommentImages::new(storage, image_policy);

    let comment = CommentUseCases {
        list: Arc::new(GetCommentsService::new(
            comments.clone(),
            comment_query,
            images.clone(),
        )),
        create: Arc::new(CreateCommentService::new(
            comments.clone(),
            comment_repo.clone(),
            images.clone(),
        )),
        get: Arc::new(GetCommentService::new(comments.clone(), images.clone())),
        update: Arc::new(UpdateCommentService::new(
            comments.clone(),
            comment_repo.clone(),
            images.clone(),
        )),
        delete: Arc::new(DeleteCommentService::new(comments, comment_repo, images)),
        max_image_bytes,
    };

    AppState {
        topic,
        post,
        comment,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let server_config = ServerConfig::from_env().context("Invalid server configuration")?;
    let s3_config = S3Config::from_env().context("Invalid storage configuration")?;
    let image_policy = ImagePolicy::from_env().context("Invalid image policy")?;

    // Database connection
    let mut opt = ConnectOptions::new(server_config.database_url.clone());
    opt.max_connections(server_config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    let storage: Arc<dyn ObjectStorage + Send + Sync> =
        Arc::new(S3ObjectStorage::new(s3_config).await);

    let state = build_state(&db_arc, storage, image_policy);
    let token_query: Arc<dyn ApiTokenQuery + Send + Sync> =
        Arc::new(ApiTokenQueryPostgres::new(Arc::clone(&db_arc)));

    let server_url = server_config.bind_address();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_query)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topic
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::patch_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
    // Post
    cfg.service(crate::post::adapter::incoming::web::routes::get_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::update_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::patch_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::delete_post_handler);
    // Comment
    cfg.service(crate::comment::adapter::incoming::web::routes::get_comments_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::get_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::update_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::patch_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::delete_comment_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
