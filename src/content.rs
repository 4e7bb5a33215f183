//! Static page content

use serde::Serialize;

pub const BRAND: &str = "LUNARÉ";
pub const BRAND_FULL: &str = "LUNARÉ PARFUMS";

/// In-page anchors reachable from the navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Section {
  Collections,
  Notes,
  Bestsellers,
  Story,
}

impl Section {
  pub fn anchor(self) -> &'static str {
    match self {
      Section::Collections => "collections",
      Section::Notes => "notes",
      Section::Bestsellers => "bestsellers",
      Section::Story => "story",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Section::Collections => "Koleksiyonlar",
      Section::Notes => "Notalar",
      Section::Bestsellers => "Çok Satanlar",
      Section::Story => "Hikayemiz",
    }
  }
}

/// Header navigation entries
pub const NAV_SECTIONS: [Section; 3] = [Section::Collections, Section::Notes, Section::Story];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Collection {
  pub title: &'static str,
  pub image: &'static str,
  pub description: &'static str,
}

pub const COLLECTIONS: [Collection; 3] = [
  Collection {
    title: "Nocturne",
    image: "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1600&auto=format&fit=crop",
    description: "Mür, sedir ve kakule ile koyu bir gece yürüyüşü.",
  },
  Collection {
    title: "Améthyste",
    image: "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1600&auto=format&fit=crop",
    description: "Menekşe, lavanta ve misk ile mor tonlarda bir zarafet.",
  },
  Collection {
    title: "Argent",
    image: "https://images.unsplash.com/photo-1509833903111-9cb142f644e1?q=80&w=1600&auto=format&fit=crop",
    description: "Bergamot, vetiver ve amberin sofistike dokunuşu.",
  },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NoteTier {
  Top,
  Heart,
  Base,
}

impl NoteTier {
  pub fn icon(self) -> &'static str {
    match self {
      NoteTier::Top => "leaf",
      NoteTier::Heart => "droplets",
      NoteTier::Base => "flame",
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      NoteTier::Top => "Üst Nota",
      NoteTier::Heart => "Orta Nota",
      NoteTier::Base => "Alt Nota",
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Note {
  pub tier: NoteTier,
  pub ingredients: &'static [&'static str],
}

impl Note {
  /// Ingredients joined with a middle dot
  pub fn text(&self) -> String {
    self.ingredients.join(" · ")
  }
}

pub const NOTES: [Note; 3] = [
  Note {
    tier: NoteTier::Top,
    ingredients: &["Bergamot", "Kakule"],
  },
  Note {
    tier: NoteTier::Heart,
    ingredients: &["Menekşe", "Lavanta"],
  },
  Note {
    tier: NoteTier::Base,
    ingredients: &["Amber", "Misk"],
  },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
  pub name: &'static str,
  /// Whole Turkish lira
  pub price: u32,
  pub image: &'static str,
}

impl Product {
  pub fn display_price(&self) -> String {
    format_price(self.price)
  }
}

pub const BESTSELLERS: [Product; 3] = [
  Product {
    name: "Eau de Minuit",
    price: 2490,
    image: "https://images.unsplash.com/photo-1547887538-047f814d52b0?q=80&w=1600&auto=format&fit=crop",
  },
  Product {
    name: "Nocturne Intense",
    price: 2890,
    image: "https://images.unsplash.com/photo-1520950237264-8f9517e83f51?q=80&w=1600&auto=format&fit=crop",
  },
  Product {
    name: "Améthyste 50ml",
    price: 1990,
    image: "https://images.unsplash.com/photo-1611930022073-b7a4ba5fcccd?q=80&w=1600&auto=format&fit=crop",
  },
];

/// Lira amount with dot thousands separators, e.g. `₺2.490`
pub fn format_price(lira: u32) -> String {
  let digits = lira.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
  out.push('₺');
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push('.');
    }
    out.push(c);
  }
  out
}

pub const HERO_IMAGE: &str =
  "https://images.unsplash.com/photo-1629198720078-2b2cfb1af654?q=80&w=1600&auto=format&fit=crop";

pub const STORY_IMAGE: &str =
  "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?q=80&w=1600&auto=format&fit=crop";

pub const STORY_POINTS: [&str; 3] = [
  "Avrupa menşeli esanslar",
  "Vegan & hayvan dostu",
  "Geri dönüştürülebilir ambalaj",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LinkGroup {
  pub title: &'static str,
  pub links: &'static [&'static str],
}

pub const FOOTER_GROUPS: [LinkGroup; 2] = [
  LinkGroup {
    title: "Mağaza",
    links: &["Yeni Gelenler", "Hediye Setleri", "Aksesuar"],
  },
  LinkGroup {
    title: "Destek",
    links: &["S.S.S", "İletişim", "Kargo & İade"],
  },
];

pub const SOCIAL_LINKS: [&str; 3] = ["IG", "TT", "YT"];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_price() {
    assert_eq!(format_price(0), "₺0");
    assert_eq!(format_price(990), "₺990");
    assert_eq!(format_price(2490), "₺2.490");
    assert_eq!(format_price(1_250_000), "₺1.250.000");
  }

  #[test]
  fn test_note_text() {
    assert_eq!(NOTES[0].text(), "Bergamot · Kakule");
    assert_eq!(NOTES[2].tier.icon(), "flame");
  }

  #[test]
  fn test_anchors_unique() {
    let all = [
      Section::Collections,
      Section::Notes,
      Section::Bestsellers,
      Section::Story,
    ];
    for (i, a) in all.iter().enumerate() {
      for b in &all[i + 1..] {
        assert_ne!(a.anchor(), b.anchor());
      }
    }
  }
}
