// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use articles_api::domain::article::{
    Article, ArticleFields, ArticleId, ArticleReadRepository, ArticleSummary, ArticleTransaction,
    ArticleWriteRepository, NewArticle, PageRequest, SortOrder,
};
use articles_api::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct StoreState {
    rows: BTreeMap<ArticleId, Article>,
    next_id: i64,
}

/// In-memory article table. Transactions stage their writes and only apply
/// them on commit; `fail_writes` makes every transactional write fail.
#[derive(Clone, Default)]
pub struct InMemoryArticleStore {
    state: Arc<Mutex<StoreState>>,
    fail_writes: Arc<AtomicBool>,
    commits: Arc<AtomicUsize>,
    rollbacks: Arc<AtomicUsize>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn rollbacks(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    /// Put rows straight into the table, bypassing transactions.
    pub fn seed(&self, articles: impl IntoIterator<Item = Article>) {
        let mut state = self.state.lock().unwrap();
        for article in articles {
            let id = i64::from(article.id);
            state.next_id = state.next_id.max(id);
            state.rows.insert(article.id, article);
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        let id = ArticleId::new(id).ok()?;
        self.state.lock().unwrap().rows.get(&id).cloned()
    }

    fn allocate_id(&self) -> DomainResult<ArticleId> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        ArticleId::new(state.next_id)
    }

    fn reserve_id(&self, id: ArticleId) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(i64::from(id));
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.lock().unwrap().rows.get(&id).cloned())
    }

    async fn list_published(
        &self,
        page: PageRequest,
        order: SortOrder,
    ) -> DomainResult<(Vec<ArticleSummary>, u64)> {
        let mut published: Vec<Article> = self
            .state
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|article| article.status.is_published())
            .cloned()
            .collect();

        published.sort_by_key(|article| (article.updated_at, article.id));
        if order == SortOrder::Desc {
            published.reverse();
        }

        let total = published.len() as u64;
        let items = published
            .iter()
            .skip(page.offset() as usize)
            .take(page.per_page() as usize)
            .map(Article::summary)
            .collect();
        Ok((items, total))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        Ok(Box::new(InMemoryTransaction {
            store: self.clone(),
            staged: BTreeMap::new(),
        }))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

pub struct InMemoryTransaction {
    store: InMemoryArticleStore,
    staged: BTreeMap<ArticleId, Article>,
}

impl InMemoryTransaction {
    fn check_failure(&self) -> DomainResult<()> {
        if self.store.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("simulated write failure".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleTransaction for InMemoryTransaction {
    async fn insert(&mut self, article: NewArticle) -> DomainResult<Article> {
        self.check_failure()?;
        let id = self.store.allocate_id()?;
        let mut created = Article::create(id, article.fields, article.created_at);
        created.updated_at = article.updated_at;
        self.staged.insert(id, created.clone());
        Ok(created)
    }

    async fn upsert(
        &mut self,
        id: ArticleId,
        fields: ArticleFields,
        now: DateTime<Utc>,
    ) -> DomainResult<Article> {
        self.check_failure()?;
        let existing = match self.staged.get(&id) {
            Some(staged) => Some(staged.clone()),
            None => self.store.find_by_id(id).await?,
        };

        let article = match existing {
            Some(mut article) => {
                article.overwrite(fields, now);
                article
            }
            None => {
                self.store.reserve_id(id);
                Article::create(id, fields, now)
            }
        };
        self.staged.insert(id, article.clone());
        Ok(article)
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let InMemoryTransaction { store, staged } = *self;
        store.state.lock().unwrap().rows.extend(staged);
        store.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        self.store.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
