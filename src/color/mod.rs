//! Ядро сервиса: разбор hex-цветов, усреднение и поиск ближайшего цвета палитры.

use custom_error::custom_error;

pub mod validate;

/// Палитра именованных цветов.
///
/// Записи просматриваются в порядке объявления, поэтому при равных расстояниях побеждает более ранняя запись.
pub const PALETTE: [(&str, &str); 6] = [
  ("White", "#FFFFFF"),
  ("Black", "#000000"),
  ("Red", "#FF0000"),
  ("Green", "#00FF00"),
  ("Blue", "#0000FF"),
  ("Yellow", "#FFFF00"),
];

/// Возможные ошибки при разборе цвета.
custom_error!{ pub ParseError
  IncompatibleLen = "Цвет не представлен в виде #RRGGBB.",
  BadHexDigit = "Компонента цвета не является шестнадцатеричным числом."
}

/// Цвет в виде трёх компонент RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

/// Разбирает цвет вида #RRGGBB в тройку RGB.
///
/// Регистр цифр не имеет значения. Корректность строки гарантируется валидацией (см. validate), но при некорректной строке функция возвращает ошибку, а не паникует.
pub fn decode(hex: &str) -> Result<Rgb, ParseError> {
  if hex.len() != 7 || !hex.is_ascii() {
    return Err(ParseError::IncompatibleLen);
  };
  let channel = |pos: usize| u8::from_str_radix(&hex[pos..pos + 2], 16)
    .map_err(|_| ParseError::BadHexDigit);
  Ok(Rgb { r: channel(1)?, g: channel(3)?, b: channel(5)? })
}

/// Форматирует тройку RGB в строку вида #RRGGBB с цифрами в верхнем регистре.
pub fn encode(rgb: Rgb) -> String {
  format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Покомпонентное среднее списка цветов.
///
/// Деление целочисленное, с усечением (не округлением). Список должен быть непустым: это обеспечивает валидация.
pub fn average(colors: &[String]) -> Result<Rgb, ParseError> {
  let (mut r_sum, mut g_sum, mut b_sum) = (0u32, 0u32, 0u32);
  for color in colors {
    let rgb = decode(color)?;
    r_sum += rgb.r as u32;
    g_sum += rgb.g as u32;
    b_sum += rgb.b as u32;
  }
  let count = colors.len() as u32;
  Ok(Rgb {
    r: (r_sum / count) as u8,
    g: (g_sum / count) as u8,
    b: (b_sum / count) as u8,
  })
}

/// Возвращает имя ближайшего цвета палитры по евклидову расстоянию в пространстве RGB.
pub fn closest_name(rgb: Rgb) -> &'static str {
  let mut min_dist = f64::MAX;
  let mut closest = "Unknown";
  for (name, hex) in PALETTE {
    let reference = match decode(hex) {
      Ok(v) => v,
      Err(_) => continue,
    };
    let dr = rgb.r as f64 - reference.r as f64;
    let dg = rgb.g as f64 - reference.g as f64;
    let db = rgb.b as f64 - reference.b as f64;
    let dist = (dr * dr + dg * dg + db * db).sqrt();
    if dist < min_dist {
      min_dist = dist;
      closest = name;
    };
  }
  closest
}

/// Смешивает список цветов: усредняет их и подбирает имя ближайшего цвета палитры.
pub fn combine(colors: &[String]) -> Result<(String, &'static str), ParseError> {
  let combined = average(colors)?;
  Ok((encode(combined), closest_name(combined)))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn owned(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
  }

  #[test]
  fn decode_parses_channels() {
    assert_eq!(decode("#112233").unwrap(), Rgb { r: 0x11, g: 0x22, b: 0x33 });
    assert_eq!(decode("#ff00Aa").unwrap(), Rgb { r: 255, g: 0, b: 170 });
  }

  #[test]
  fn decode_rejects_malformed_strings() {
    assert!(decode("#FFF").is_err());
    assert!(decode("112233").is_err());
    assert!(decode("#GGGGGG").is_err());
    // Многобайтовые символы не должны приводить к панике на границах срезов.
    assert!(decode("#ЯЯЯ").is_err());
  }

  #[test]
  fn encode_is_uppercase_and_zero_padded() {
    assert_eq!(encode(Rgb { r: 0, g: 0, b: 0 }), "#000000");
    assert_eq!(encode(Rgb { r: 127, g: 127, b: 0 }), "#7F7F00");
    assert_eq!(encode(Rgb { r: 1, g: 10, b: 255 }), "#010AFF");
  }

  #[test]
  fn average_truncates_toward_zero() {
    // (0+1)/2 = 0 в целочисленном делении, а не 0.5 с округлением.
    let combined = average(&owned(&["#000000", "#000001"])).unwrap();
    assert_eq!(encode(combined), "#000000");
  }

  #[test]
  fn average_of_red_and_green() {
    let combined = average(&owned(&["#FF0000", "#00FF00"])).unwrap();
    assert_eq!(encode(combined), "#7F7F00");
  }

  #[test]
  fn single_color_round_trips() {
    let (combined, _) = combine(&owned(&["#112233"])).unwrap();
    assert_eq!(combined, "#112233");
  }

  #[test]
  fn copies_of_one_color_round_trip() {
    let (combined, _) = combine(&owned(&["#ABCDEF"; 5])).unwrap();
    assert_eq!(combined, "#ABCDEF");
  }

  #[test]
  fn order_does_not_change_combined_color() {
    let (a, _) = combine(&owned(&["#FF0000", "#00FF00", "#123456"])).unwrap();
    let (b, _) = combine(&owned(&["#123456", "#FF0000", "#00FF00"])).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn combined_color_matches_hex_pattern() {
    let (combined, _) = combine(&owned(&["#ff00aa", "#0110fb", "#808080"])).unwrap();
    assert_eq!(combined.len(), 7);
    assert!(combined.starts_with('#'));
    assert!(combined[1..].bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));
  }

  #[test]
  fn closest_name_of_exact_palette_value() {
    assert_eq!(closest_name(Rgb { r: 255, g: 0, b: 0 }), "Red");
    assert_eq!(closest_name(Rgb { r: 0, g: 0, b: 0 }), "Black");
    assert_eq!(closest_name(Rgb { r: 255, g: 255, b: 0 }), "Yellow");
  }

  #[test]
  fn closest_name_of_near_value() {
    assert_eq!(closest_name(Rgb { r: 250, g: 5, b: 5 }), "Red");
  }

  #[test]
  fn equidistant_value_takes_earliest_palette_entry() {
    // #800080 равноудалён от Red и Blue; побеждает Red как более ранняя запись палитры.
    assert_eq!(closest_name(Rgb { r: 128, g: 0, b: 128 }), "Red");
  }
}
