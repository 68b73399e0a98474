use super::{legend, COLS, ROWS};

/// Label printed at the start of each key's 5-cell block.
pub type Legend = [[&'static str; COLS]; ROWS];

/// C64 keyboard matrix, row = CIA1 port A bit, column = port B bit.
pub const C64_LEGEND: Legend = legend! {r"
    | del | ret | lrc | f7  | f1  | f3  | f5  | udc |
    |  3  |  w  |  a  |  4  |  z  |  s  |  e  | lsh |
    |  5  |  r  |  d  |  6  |  c  |  f  |  t  |  x  |
    |  7  |  y  |  g  |  8  |  b  |  h  |  u  |  v  |
    |  9  |  i  |  j  |  0  |  m  |  k  |  o  |  n  |
    |  +  |  p  |  l  |  -  |  .  |  :  |  @  |  ,  |
    |  £  |  *  |  ;  | hom | rsh |  =  |  ↑  |  /  |
    |  1  |  ←  | ctr |  2  | spc | c=  |  q  | run |
"};
