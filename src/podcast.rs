#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
  pub title: String,
  pub items: Vec<Episode>,
}

// only the presence of an episode matters to the summary; the title is kept
// for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Episode {
  pub title: Option<String>,
}

impl From<rss::Channel> for Feed {
  fn from(channel: rss::Channel) -> Self {
    Feed {
      title: channel.title,
      items: channel.items.into_iter().map(Episode::from).collect(),
    }
  }
}

impl From<rss::Item> for Episode {
  fn from(item: rss::Item) -> Self {
    Episode { title: item.title }
  }
}

impl From<atom_syndication::Feed> for Feed {
  fn from(feed: atom_syndication::Feed) -> Self {
    Feed {
      title: feed.title.as_str().to_owned(),
      items: feed.entries.into_iter().map(Episode::from).collect(),
    }
  }
}

impl From<atom_syndication::Entry> for Episode {
  fn from(entry: atom_syndication::Entry) -> Self {
    Episode {
      title: Some(entry.title.as_str().to_owned()),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_from_rss_channel() {
    let item = rss::ItemBuilder::default()
      .title(Some("Pilot".to_owned()))
      .build();
    let untitled = rss::Item::default();

    let channel = rss::ChannelBuilder::default()
      .title("Test Podcast".to_owned())
      .items(vec![item, untitled])
      .build();

    let feed = Feed::from(channel);

    assert_eq!(feed.title, "Test Podcast");
    assert_eq!(feed.items.len(), 2);
    assert_eq!(feed.items[0].title.as_deref(), Some("Pilot"));
    // an item without any fields still counts as an episode
    assert_eq!(feed.items[1], Episode::default());
  }

  #[test]
  fn test_from_atom_feed() {
    let body = include_str!("../tests/fixtures/podcast.atom.xml");
    let atom = atom_syndication::Feed::read_from(body.as_bytes()).unwrap();

    let feed = Feed::from(atom);

    assert_eq!(feed.title, "Atom Cast");
    assert_eq!(
      feed.items,
      vec![
        Episode {
          title: Some("Second Episode".into())
        },
        Episode {
          title: Some("First Episode".into())
        },
      ]
    );
  }
}
