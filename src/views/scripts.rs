/// Infinite-scroll feed: pages through `/api/articles/..` using the
/// `continue` token until the API stops returning one.
pub const ARTICLE_FEED: &str = r#"
(function () {
  const feed = document.getElementById('article-feed');
  const status = document.getElementById('feed-status');
  const imagesOnly = document.getElementById('images-only');
  let next = null, done = false, loading = false;

  function card(article) {
    const link = document.createElement('a');
    link.className = 'card';
    link.href = '/article/' + encodeURIComponent(article.title);
    if (article.image) {
      const img = document.createElement('img');
      img.src = article.image;
      img.alt = article.title;
      link.appendChild(img);
    }
    const title = document.createElement('h3');
    title.textContent = article.title;
    const extract = document.createElement('p');
    extract.textContent = article.extract;
    link.appendChild(title);
    link.appendChild(extract);
    return link;
  }

  async function load() {
    if (loading || done) return;
    loading = true;
    status.textContent = 'Loading...';
    const params = new URLSearchParams({ images_only: imagesOnly.checked ? 'true' : 'false' });
    if (next) params.set('continue', next);
    try {
      const response = await fetch(feed.dataset.api + '?' + params);
      const data = await response.json();
      if (data.error) throw new Error(data.error);
      data.articles.forEach(a => feed.appendChild(card(a)));
      next = data.continue || null;
      done = !next;
      status.textContent = done ? (feed.children.length ? '' : 'No articles found.') : '';
    } catch (e) {
      status.textContent = 'Could not load articles: ' + e.message;
      done = true;
    } finally {
      loading = false;
    }
  }

  imagesOnly.addEventListener('change', () => {
    feed.innerHTML = '';
    next = null;
    done = false;
    load();
  });
  window.addEventListener('scroll', () => {
    if (window.innerHeight + window.scrollY >= document.body.offsetHeight - 400) load();
  });
  load();
})();
"#;

/// Requests generated material for the article on the page and fills the
/// content sections. Lesson pages also wire the exercise buttons.
pub const STUDY_CONTENT: &str = r#"
(function () {
  const section = document.getElementById('generated-content');
  const kind = section.dataset.kind;
  const base = { article_title: section.dataset.title, english_level: section.dataset.level };

  async function generate(endpoint, payload, target, key) {
    try {
      const response = await fetch(endpoint, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload)
      });
      const data = await response.json();
      if (!data.success) throw new Error(data.error || 'generation failed');
      target.innerHTML = data[key];
    } catch (e) {
      target.innerHTML = '';
      const p = document.createElement('p');
      p.className = 'error';
      p.textContent = 'Could not load content: ' + e.message;
      target.appendChild(p);
    }
  }

  generate('/api/generate-' + kind, base, section, kind);

  const exerciseTarget = document.getElementById('exercise-content');
  document.querySelectorAll('[data-exercise]').forEach(button => {
    button.addEventListener('click', () => {
      exerciseTarget.textContent = 'Preparing exercise...';
      const payload = Object.assign({ exercise_type: button.dataset.exercise }, base);
      generate('/api/generate-exercise', payload, exerciseTarget, 'exercise');
    });
  });
})();
"#;
